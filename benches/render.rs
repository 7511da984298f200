// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use proteus::format::format_answer;
use proteus::render::{render_diagram_unicode_annotated, RenderOptions};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.diagram`, `render.answers`
// - Case IDs must remain stable across refactors (e.g. `builtin`, `wide`).
fn benches_render(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("render.diagram");

        for (case_id, case) in [
            ("builtin", fixtures::Case::Builtin),
            ("wide", fixtures::Case::WideSynthetic),
        ] {
            let catalog = fixtures::catalog(case);
            let nodes = catalog.diagram().nodes().len() as u64;
            group.throughput(Throughput::Elements(nodes));
            group.bench_function(case_id, |b| {
                b.iter(|| {
                    let annotated = render_diagram_unicode_annotated(
                        black_box(catalog.diagram()),
                        RenderOptions { mark_linked: true },
                    )
                    .expect("render");
                    black_box(annotated.text.len() + annotated.highlight_index.len())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("render.answers");

        let catalog = fixtures::catalog(fixtures::Case::Builtin);
        group.throughput(Throughput::Elements(catalog.questions().len() as u64));
        group.bench_function("builtin", |b| {
            b.iter(|| {
                catalog
                    .questions()
                    .iter()
                    .map(|qa| match black_box(format_answer(qa.answer())) {
                        proteus::format::AnswerBody::Paragraph(text) => text.len(),
                        proteus::format::AnswerBody::Bullets { intro, items } => {
                            intro.len() + items.len()
                        }
                        proteus::format::AnswerBody::CodeBlock { text, code } => {
                            text.len() + code.len()
                        }
                    })
                    .sum::<usize>()
            })
        });

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
