// src/audit/mod.rs
//
// Accessibility self-audit: a fixed battery of independent checks over a
// document snapshot. Each check is a free function `&dyn Dom -> AuditResult`;
// none can abort the others.

pub mod contrast;
pub mod dom;
pub mod focus;

use std::collections::HashSet;

use crate::core::source::{LoadError, Source};
pub use dom::{Dom, HtmlDom, Node};

pub const SKIP_LINK: &str = ".skip-link";
pub const TOP_HEADING: &str = "h1";
pub const ALL_HEADINGS: &str = "h1, h2, h3, h4, h5, h6";
pub const IMAGES: &str = "img";
pub const FORM_CONTROLS: &str = "input, select, textarea";
pub const LABELS_FOR: &str = "label[for]";
pub const LANDMARKS: &str = r#"[role="banner"], [role="navigation"], [role="main"], [role="contentinfo"], header, nav, main, footer"#;
pub const FOCUSABLE: &str = r#"a, button, input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

pub const MIN_LANDMARKS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Pass,
    Fail,
    Warning,
}

impl Status {
    pub fn icon(self) -> &'static str {
        match self {
            Status::Pass => "✓",
            Status::Fail => "✗",
            Status::Warning => "⚠",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Fail => "fail",
            Status::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditResult {
    pub name: String,
    pub status: Status,
    pub message: String,
}

impl AuditResult {
    fn new(name: &str, status: Status, message: String) -> Self {
        Self { name: s!(name), status, message }
    }
}

/// Run every check, in display order.
pub fn run(dom: &dyn Dom) -> Vec<AuditResult> {
    let results = vec![
        check_skip_links(dom),
        check_heading_structure(dom),
        check_image_alt_text(dom),
        check_form_labels(dom),
        check_landmarks(dom),
        check_color_contrast(dom),
        check_keyboard_navigation(dom),
    ];

    for r in &results {
        logd!("Audit: {} → {} ({})", r.name, r.status.label(), r.message);
    }
    results
}

/// Fetch the page, snapshot it, run the checks.
pub fn audit_source(target: &Source) -> Result<Vec<AuditResult>, LoadError> {
    logf!("Audit: Begin target={target}");
    let text = target.fetch().inspect_err(|e| loge!("Audit: Fetch failed: {e}"))?;
    let dom = HtmlDom::parse(&text);
    let results = run(&dom);
    logf!(
        "Audit: Done pass={} warn={} fail={}",
        count_status(&results, Status::Pass),
        count_status(&results, Status::Warning),
        count_status(&results, Status::Fail),
    );
    Ok(results)
}

pub fn count_status(results: &[AuditResult], status: Status) -> usize {
    results.iter().filter(|r| r.status == status).count()
}

/* ---------------- Checks ---------------- */

pub fn check_skip_links(dom: &dyn Dom) -> AuditResult {
    let n = dom.count(SKIP_LINK);
    if n > 0 {
        AuditResult::new("Skip Links", Status::Pass, format!("Found {n} skip link(s)"))
    } else {
        AuditResult::new(
            "Skip Links",
            Status::Fail,
            s!("No skip links found. Add skip links for keyboard users."),
        )
    }
}

pub fn check_heading_structure(dom: &dyn Dom) -> AuditResult {
    let h1 = dom.count(TOP_HEADING);
    let (status, message) = match h1 {
        1 => (
            Status::Pass,
            format!("Proper heading structure with {} headings", dom.count(ALL_HEADINGS)),
        ),
        0 => (Status::Fail, s!("No H1 tag found. Pages should have exactly one H1.")),
        n => (Status::Warning, format!("Multiple H1 tags found ({n}). Should have only one.")),
    };
    AuditResult::new("Heading Structure", status, message)
}

/// Decorative images are opted out with `aria-hidden="true"`.
fn is_decorative(img: &Node) -> bool {
    img.attr("aria-hidden").is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

pub fn check_image_alt_text(dom: &dyn Dom) -> AuditResult {
    let images = dom.select(IMAGES);
    let missing = images
        .iter()
        .filter(|img| img.attr("alt").is_none() && !is_decorative(img))
        .count();

    if missing == 0 {
        AuditResult::new(
            "Image Alt Text",
            Status::Pass,
            format!("All {} images have alt text or are marked decorative", images.len()),
        )
    } else {
        AuditResult::new(
            "Image Alt Text",
            Status::Fail,
            format!("{missing} of {} images missing alt text", images.len()),
        )
    }
}

pub fn check_form_labels(dom: &dyn Dom) -> AuditResult {
    let controls = dom.select(FORM_CONTROLS);
    let label_targets: HashSet<String> = dom
        .select(LABELS_FOR)
        .iter()
        .filter_map(|l| l.attr("for"))
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect();

    let unlabeled = controls
        .iter()
        .filter(|c| {
            let by_for = c.attr("id").is_some_and(|id| label_targets.contains(id));
            !by_for && !c.has_value("aria-label") && !c.has_value("aria-labelledby")
        })
        .count();

    if unlabeled == 0 {
        AuditResult::new(
            "Form Labels",
            Status::Pass,
            format!("All {} form controls have labels", controls.len()),
        )
    } else {
        AuditResult::new(
            "Form Labels",
            Status::Fail,
            format!("{unlabeled} of {} form controls missing labels", controls.len()),
        )
    }
}

pub fn check_landmarks(dom: &dyn Dom) -> AuditResult {
    let n = dom.count(LANDMARKS);
    if n >= MIN_LANDMARKS {
        AuditResult::new("ARIA Landmarks", Status::Pass, format!("Found {n} landmark elements"))
    } else {
        AuditResult::new(
            "ARIA Landmarks",
            Status::Warning,
            format!("Only {n} landmarks found. Consider adding more semantic structure."),
        )
    }
}

/// Advisory only: rendered colours aren't available to a markup snapshot.
pub fn check_color_contrast(_dom: &dyn Dom) -> AuditResult {
    AuditResult::new(
        "Color Contrast",
        Status::Warning,
        format!(
            "Manual color contrast testing recommended. Ensure {}:1 ratio for normal text, {}:1 for large text.",
            contrast::AA_NORMAL_TEXT,
            contrast::AA_LARGE_TEXT,
        ),
    )
}

pub fn check_keyboard_navigation(dom: &dyn Dom) -> AuditResult {
    let n = dom.count(FOCUSABLE);
    if n > 0 {
        AuditResult::new("Keyboard Navigation", Status::Pass, format!("{n} focusable elements found"))
    } else {
        AuditResult::new("Keyboard Navigation", Status::Fail, s!("No focusable elements found"))
    }
}
