use super::escape_html;

/// Route and document metadata for a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const LANDING_PAGE: Page = Page {
    path: "/",
    title: "ExamHall - Find Your Examination Hall Instantly",
    description: "Quickly find your assigned examination hall with our streamlined allocation system. No more confusion, no stress - enter your details and get your hall assignment instantly.",
};

pub const ALLOCATION_PAGE: Page = Page {
    path: "/allocation",
    title: "Find Your Exam Hall - ExamHall Allocation System",
    description: "Enter your matriculation number and details to find your examination hall allocation. Get instant results with hall number, date, and time.",
};

pub const NOT_FOUND_PAGE: Page = Page {
    path: "",
    title: "Page Not Found - ExamHall Allocation System",
    description: "The page you are looking for does not exist.",
};

const NAV_LINKS: [(&str, &str); 2] = [("/", "Home"), ("/allocation", "Find Your Hall")];

const STYLES: &str = "body{margin:0;font-family:system-ui,sans-serif;background:#f7f8fc;color:#1b2333}\
a{color:inherit}.container{max-width:72rem;margin:0 auto;padding:0 1rem}\
.site-nav{position:sticky;top:0;background:#fff;border-bottom:1px solid #e3e6ef}\
.site-nav .container{display:flex;align-items:center;justify-content:space-between;height:4.5rem}\
.nav-links a{margin-left:1.5rem;text-decoration:none;color:#5b6477}.nav-links a.active{color:#0f9d76;font-weight:600}\
.btn-hero{display:inline-block;padding:.8rem 1.6rem;border:0;border-radius:.75rem;background:#0f9d76;color:#fff;font-weight:600;text-decoration:none;cursor:pointer}\
.glass-card{background:#fff;border-radius:1rem;box-shadow:0 8px 30px rgba(15,23,42,.08);padding:2rem;margin:2rem auto;max-width:42rem}\
.field{margin-bottom:1.2rem}.field label{display:block;font-weight:500;margin-bottom:.4rem}\
.field input{width:100%;box-sizing:border-box;padding:.75rem;border:1px solid #cfd5e3;border-radius:.6rem}\
.field.invalid input{border-color:#d93b3b}.field.valid input{border-color:#0f9d76}\
.field-error{color:#d93b3b;font-size:.875rem}.required{color:#d93b3b}\
.hero{padding:6rem 0 4rem;text-align:center;background:#12284a;color:#fff}.hero .accent{color:#f5b841}\
.stats{display:flex;justify-content:center;gap:3rem;margin-top:3rem}.features{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:1.5rem;padding:4rem 0}\
.site-footer{background:#12284a;color:#cdd6e8;padding:3rem 0;margin-top:4rem}\
.result-card dl{display:grid;grid-template-columns:max-content 1fr;gap:.5rem 1.5rem}.result-card dt{color:#5b6477}";

/// Wrap page content in the shared document shell: metadata, navigation, footer.
pub fn render_document(page: &Page, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1"><title>{title}</title><meta name="description" content="{description}"><style>{STYLES}</style></head><body>{nav}<main>{body}</main>{footer}</body></html>"#,
        title = escape_html(page.title),
        description = escape_html(page.description),
        nav = render_navigation(page.path),
        footer = render_footer(),
    )
}

fn render_navigation(active_path: &str) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(href, label)| {
            if *href == active_path {
                format!(r#"<a href="{href}" class="active" aria-current="page">{label}</a>"#)
            } else {
                format!(r#"<a href="{href}">{label}</a>"#)
            }
        })
        .collect();

    format!(
        r#"<nav class="site-nav"><div class="container"><a href="/" class="brand"><strong>ExamHall</strong><br><small>Allocation System</small></a><div class="nav-links">{links}<a href="/allocation" class="btn-hero">Get Started</a></div></div></nav>"#
    )
}

fn render_footer() -> &'static str {
    r##"<footer class="site-footer"><div class="container"><div class="footer-brand"><h3>ExamHall</h3><p>Your trusted companion for finding examination hall allocations. Designed to make exam preparation stress-free for students across all departments.</p></div><div class="footer-links"><h4>Quick Links</h4><ul><li><a href="/">Home</a></li><li><a href="/allocation">Find Your Hall</a></li><li><a href="/#features">Features</a></li></ul></div><div class="footer-contact"><h4>Contact Us</h4><ul><li>support@examhall.edu</li><li>Examination Office, Main Campus, University Road</li></ul></div><p class="footer-legal">&copy; 2025 ExamHall Allocation System. All rights reserved.</p></div></footer>"##
}
