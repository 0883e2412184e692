use super::escape_html;
use super::layout::{render_document, LANDING_PAGE};

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Instant Search",
        description: "Find your examination hall in seconds. Simply enter your matriculation number and other details to get your hall assignment immediately.",
    },
    Feature {
        title: "Accurate Information",
        description: "Get reliable and up-to-date hall allocations directly from the examination office. No more outdated or incorrect information.",
    },
    Feature {
        title: "Lightning Fast",
        description: "Our optimized system delivers results in under 5 seconds. No waiting, no delays, just instant access to your exam details.",
    },
    Feature {
        title: "Print & Save",
        description: "Download or print your hall allocation slip for easy reference. Keep a copy for your records and share with classmates.",
    },
];

const STATS: [(&str, &str); 3] = [
    ("50+", "Exam Halls"),
    ("10K+", "Students"),
    ("&lt;5s", "Search Time"),
];

pub fn render_landing() -> String {
    let stats: String = STATS
        .iter()
        .map(|(value, label)| {
            format!(r#"<div class="stat"><strong>{value}</strong><span>{label}</span></div>"#)
        })
        .collect();

    let features: String = FEATURES
        .iter()
        .map(|feature| {
            format!(
                r#"<article class="glass-card feature"><h3>{}</h3><p>{}</p></article>"#,
                escape_html(feature.title),
                feature.description,
            )
        })
        .collect();

    let body = format!(
        r##"<section class="hero"><div class="container"><h1>Find Your <span class="accent">Examination Hall</span> In Seconds</h1><p>Quickly locate your assigned examination hall with our streamlined allocation system. No more confusion, no more stress. Just enter your details and get your hall assignment instantly.</p><p><a href="/allocation" class="btn-hero">Find Your Exam Hall</a> <a href="#features" class="btn-outline">Learn More</a></p><div class="stats">{stats}</div></div></section><section id="features" class="container"><header><span class="badge">Features</span><h2>Why Use Our System?</h2><p>Designed with students in mind, our examination hall allocation system makes finding your exam venue effortless.</p></header><div class="features">{features}</div><div class="glass-card cta"><h3>Ready to Find Your Hall?</h3><p>Join thousands of students who have already found their examination halls using our system. It's quick, easy, and free!</p><a href="/allocation" class="btn-hero">Search Now</a></div></section>"##
    );

    render_document(&LANDING_PAGE, &body)
}
