use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rbr_leader::scrape;
use rbr_leader::specs::{Layout, vehicle::split_name_vehicle};

fn sample_page(rows: usize) -> String {
    let mut body = String::new();
    for i in 0..rows {
        body.push_str(&format!(
            "<tr><td>{i}.</td><td>driver{i} / co{i}Mitsubishi Lancer Evo IX</td><td>03:4{}.000</td><td>+0.1</td><td>+{i}.0</td></tr>",
            i % 10
        ));
    }
    format!(
        r#"<table class="rally_results_stres_right"></table><table class="rally_results_stres_right">{body}</table>"#
    )
}

fn bench_split(c: &mut Criterion) {
    // Late brand in the list: worst case for the linear scan
    c.bench_function("split_late_brand", |b| {
        b.iter(|| split_name_vehicle(black_box("someone / Somebody ElseLancia Delta HF Integrale")))
    });

    c.bench_function("split_no_brand", |b| {
        b.iter(|| split_name_vehicle(black_box("someone / Somebody Else Trabant 601")))
    });

    let doc = sample_page(200);
    c.bench_function("parse_stage_page_200", |b| {
        b.iter(|| {
            let snap = scrape::parse_page(black_box(&doc), Layout::Stage).unwrap();
            black_box(snap.len())
        })
    });
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
