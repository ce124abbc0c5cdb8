//! Parse + generate benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swinggen_codegen::generate;
use swinggen_parser::parse;

const SIMPLE_DOC: &str = "\
Begin Frame
    Title \"Hi\"
End Frame
";

const MEDIUM_DOC: &str = "\
Begin Frame
    Title \"Form\"
    Layout border
    Begin MenuBar
        Begin Menu
            Text \"File\"
            Begin MenuItem
                Text \"Open\"
                Action \"open\"
            End MenuItem
            Begin MenuItem
                Text \"Quit\"
                Action \"quit\"
            End MenuItem
        End Menu
    End MenuBar
    Begin Panel
        Layout grid
        Begin Label
            Text \"Name:\"
        End Label
        Begin TextField
            Columns 32
        End TextField
        Begin Label
            Text \"Email:\"
        End Label
        Begin TextField
        End TextField
        Begin Button
            Text \"Submit\"
            Action \"submit\"
        End Button
    End Panel
    Pack
End Frame
";

fn parse_simple(c: &mut Criterion) {
    c.bench_function("parse_simple", |b| b.iter(|| parse(black_box(SIMPLE_DOC))));
}

fn parse_medium(c: &mut Criterion) {
    c.bench_function("parse_medium", |b| b.iter(|| parse(black_box(MEDIUM_DOC))));
}

fn generate_medium(c: &mut Criterion) {
    let forest = parse(MEDIUM_DOC).unwrap();
    c.bench_function("generate_medium", |b| {
        b.iter(|| generate(black_box(&forest), black_box("Form")))
    });
}

criterion_group!(benches, parse_simple, parse_medium, generate_medium);
criterion_main!(benches);
