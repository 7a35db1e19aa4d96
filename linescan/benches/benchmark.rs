use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linescan::dfa::Dfa;
use linescan::nfa::Nfa;
use linescan::regex::{normalize, parse};
use regex::Regex as LibRegex;

const SAMPLE_PATTERN: &str = "(a|b)*abb(c|d)+[0-9]*";
const SAMPLE_LINE: &str = "aabbabbccccd42 and some trailing text to scan past";

pub fn regex_compile(c: &mut Criterion) {
    c.bench_function("linescan regex compile", |b| {
        b.iter(|| {
            let input = black_box(SAMPLE_PATTERN);
            let normalized = normalize(input).unwrap();
            let tree = parse(&normalized).unwrap();
            let nfa = Nfa::from_tree(&tree);
            Dfa::from_nfa(&nfa).minimize()
        })
    });

    c.bench_function("library regex compile", |b| {
        b.iter(|| LibRegex::new(black_box(SAMPLE_PATTERN)).unwrap())
    });
}

pub fn regex_match(c: &mut Criterion) {
    let normalized = normalize(SAMPLE_PATTERN).unwrap();
    let tree = parse(&normalized).unwrap();
    let nfa = Nfa::from_tree(&tree);
    let dfa = Dfa::from_nfa(&nfa).minimize();

    c.bench_function("linescan regex match", |b| {
        b.iter(|| linescan::matcher::is_match(&dfa, black_box(SAMPLE_LINE)))
    });

    let lib_regex = LibRegex::new(SAMPLE_PATTERN).unwrap();
    c.bench_function("library regex match", |b| {
        b.iter(|| lib_regex.is_match(black_box(SAMPLE_LINE)))
    });
}

pub fn kmp_match(c: &mut Criterion) {
    let pattern = linescan::kmp::KmpPattern::compile("ababcabcabcabd").unwrap();
    let text = "abababcabcabcabcabcabcabcabdabababcabcabcabcabcabcabcabd";
    c.bench_function("kmp match", |b| {
        b.iter(|| pattern.is_match_in_line(black_box(text)))
    });
}

criterion_group!(benches, regex_compile, regex_match, kmp_match);
criterion_main!(benches);
