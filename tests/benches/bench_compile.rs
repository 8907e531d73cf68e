use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sieve_query::{Compiler, Document, Matcher};

pub fn compile_short(c: &mut Criterion) {
    let compiler = Compiler::default();
    c.bench_function("compile short pattern", |b| {
        b.iter(|| black_box(compiler.compile(black_box("fmt.Sprintf(:[fmt], :[[arg]])"))).unwrap());
    });
}

pub fn compile_1000_holes(c: &mut Criterion) {
    let mut pattern = String::new();
    for i in 0..1000 {
        pattern.push_str(&format!("f{i}(:[a{i}]) "));
    }
    let compiler = Compiler::default();
    c.bench_function("compile 1000 holes", |b| {
        b.iter(|| black_box(compiler.compile(&pattern)).unwrap());
    });
}

pub fn match_large_file(c: &mut Criterion) {
    let mut content = String::new();
    for i in 0..10_000 {
        content.push_str(&format!("let x{i} = compute({i}, {});\n", i * 2));
    }
    content.push_str("if err != nil {\n\treturn err\n}\n");
    let query = Compiler::default().compile("if :[cond] {\n:[body]\n}").unwrap();
    let matcher = Matcher::new(&query).unwrap();
    c.bench_function("match 10000 lines", |b| {
        b.iter(|| black_box(matcher.is_match(&Document::new(&content))));
    });
}

criterion_group!(bench_compile, compile_short, compile_1000_holes, match_large_file);
criterion_main!(bench_compile);
