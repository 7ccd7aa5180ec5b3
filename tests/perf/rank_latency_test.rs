use std::time::Instant;

use crate::model::{I18nText, Site};
use crate::search::rank;

fn p95_ms(samples: &mut [f64]) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let last = samples.len().saturating_sub(1);
    let idx = ((last as f64) * 0.95).round() as usize;
    samples[idx.min(last)]
}

fn catalog_site(index: usize) -> Site {
    Site {
        name: I18nText::new(
            &format!("站点 {index:05}"),
            &format!("Directory Entry {index:05}"),
        ),
        url: format!("https://entry-{index:05}.example.com"),
        description: I18nText::new("目录条目", "A generated directory entry"),
        icon: String::new(),
        category: "generated".to_string(),
        tags: vec!["generated".to_string()],
        featured: false,
    }
}

#[test]
fn warm_rank_p95_under_15ms() {
    let mut sites: Vec<Site> = (0..10_000).map(catalog_site).collect();

    sites.push(Site {
        name: I18nText::new("GitHub", "GitHub"),
        url: "https://github.com".to_string(),
        description: I18nText::new("代码托管", "Code hosting"),
        icon: String::new(),
        category: "dev".to_string(),
        tags: vec!["git".to_string(), "code".to_string()],
        featured: true,
    });

    for _ in 0..30 {
        let _ = rank("github", &sites);
    }

    let mut batch_p95 = Vec::with_capacity(5);
    for _ in 0..5 {
        let mut samples = Vec::with_capacity(80);
        for _ in 0..80 {
            let start = Instant::now();
            let _ = rank("github", &sites);
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
        }
        batch_p95.push(p95_ms(&mut samples));
    }

    batch_p95.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median_p95 = batch_p95[batch_p95.len() / 2];

    assert!(
        median_p95 <= 15.0,
        "median batch p95 too high: {median_p95:.3}ms (budget 15.0ms); batches={batch_p95:?}",
    );
}
