// tests/audit_checks.rs
//
// Canned-answer Dom so each check can be driven without a browser or parser.
//
use std::collections::HashMap;
use std::fs;

use unifhorce::audit::{self, Dom, HtmlDom, Node, Status};
use unifhorce::core::source::Source;

#[derive(Default)]
struct StubDom {
    answers: HashMap<&'static str, Vec<Node>>,
}

impl StubDom {
    fn with(mut self, selector: &'static str, nodes: Vec<Node>) -> Self {
        self.answers.insert(selector, nodes);
        self
    }
}

impl Dom for StubDom {
    fn select(&self, selector: &str) -> Vec<Node> {
        self.answers.get(selector).cloned().unwrap_or_default()
    }
}

fn nodes(tag: &str, n: usize) -> Vec<Node> {
    (0..n).map(|_| Node::new(tag)).collect()
}

#[test]
fn skip_links() {
    let r = audit::check_skip_links(&StubDom::default());
    assert_eq!(r.status, Status::Fail);

    let dom = StubDom::default().with(audit::SKIP_LINK, nodes("a", 1));
    assert_eq!(audit::check_skip_links(&dom).status, Status::Pass);
}

#[test]
fn heading_structure_single_none_multiple() {
    let one = StubDom::default()
        .with(audit::TOP_HEADING, nodes("h1", 1))
        .with(audit::ALL_HEADINGS, nodes("h2", 4));
    let r = audit::check_heading_structure(&one);
    assert_eq!(r.name, "Heading Structure");
    assert_eq!(r.status, Status::Pass);
    assert_eq!(r.message, "Proper heading structure with 4 headings");

    let none = audit::check_heading_structure(&StubDom::default());
    assert_eq!(none.status, Status::Fail);
    assert_eq!(none.message, "No H1 tag found. Pages should have exactly one H1.");

    let two = StubDom::default().with(audit::TOP_HEADING, nodes("h1", 2));
    let r = audit::check_heading_structure(&two);
    assert_eq!(r.status, Status::Warning);
    assert_eq!(r.message, "Multiple H1 tags found (2). Should have only one.");
}

#[test]
fn image_alt_text_counts_offenders() {
    let images = vec![
        Node::new("img").with_attr("alt", "Logo"),
        Node::new("img").with_attr("alt", ""),
        Node::new("img").with_attr("aria-hidden", "true"),
        Node::new("img"),
        Node::new("img").with_attr("aria-hidden", "false"),
    ];
    let dom = StubDom::default().with(audit::IMAGES, images);
    let r = audit::check_image_alt_text(&dom);
    assert_eq!(r.status, Status::Fail);
    assert!(r.message.starts_with("2 of 5"), "{}", r.message);

    let ok = audit::check_image_alt_text(&StubDom::default());
    assert_eq!(ok.status, Status::Pass);
}

#[test]
fn form_labels_accept_for_aria_label_and_labelledby() {
    let controls = vec![
        Node::new("input").with_attr("id", "name"),
        Node::new("input").with_attr("aria-label", "Email"),
        Node::new("textarea").with_attr("aria-labelledby", "msg-heading"),
    ];
    let labels = vec![Node::new("label").with_attr("for", "name")];
    let dom = StubDom::default()
        .with(audit::FORM_CONTROLS, controls.clone())
        .with(audit::LABELS_FOR, labels);
    assert_eq!(audit::check_form_labels(&dom).status, Status::Pass);

    let mut more = controls;
    more.push(Node::new("select").with_attr("id", "unlabelled"));
    more.push(Node::new("input").with_attr("aria-label", "  "));
    let dom = StubDom::default().with(audit::FORM_CONTROLS, more);
    let r = audit::check_form_labels(&dom);
    assert_eq!(r.status, Status::Fail);
    // no label[for] this time, so #name is unlabelled too
    assert!(r.message.starts_with("3 of 5"), "{}", r.message);
}

#[test]
fn landmarks_need_three() {
    let few = StubDom::default().with(audit::LANDMARKS, nodes("main", 2));
    let r = audit::check_landmarks(&few);
    assert_eq!(r.status, Status::Warning);
    assert_eq!(r.message, "Only 2 landmarks found. Consider adding more semantic structure.");

    let enough = StubDom::default().with(audit::LANDMARKS, nodes("nav", 3));
    let r = audit::check_landmarks(&enough);
    assert_eq!(r.status, Status::Pass);
    assert_eq!(r.message, "Found 3 landmark elements");
}

#[test]
fn color_contrast_is_always_advisory() {
    let r = audit::check_color_contrast(&StubDom::default());
    assert_eq!(r.status, Status::Warning);
    assert!(r.message.contains("4.5:1"));
    assert!(r.message.contains("3:1"));
}

#[test]
fn keyboard_navigation() {
    assert_eq!(audit::check_keyboard_navigation(&StubDom::default()).status, Status::Fail);
    let dom = StubDom::default().with(audit::FOCUSABLE, nodes("a", 5));
    let r = audit::check_keyboard_navigation(&dom);
    assert_eq!(r.status, Status::Pass);
    assert_eq!(r.message, "5 focusable elements found");
}

#[test]
fn html_snapshot_runs_all_checks_in_order() {
    let dom = HtmlDom::parse(
        r##"<html><body>
             <a class="skip-link" href="#m">Skip</a>
             <header></header><nav></nav>
             <main id="m"><h1>Title</h1><h2>Sub</h2>
               <img src="x.png">
               <div tabindex="-1">not focusable</div>
               <span tabindex="0">focusable</span>
             </main>
           </body></html>"##,
    );
    let results = audit::run(&dom);
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Skip Links",
            "Heading Structure",
            "Image Alt Text",
            "Form Labels",
            "ARIA Landmarks",
            "Color Contrast",
            "Keyboard Navigation",
        ]
    );
    assert_eq!(results[0].status, Status::Pass);
    assert_eq!(results[1].message, "Proper heading structure with 2 headings");
    assert_eq!(results[2].status, Status::Fail);
    assert_eq!(results[3].status, Status::Pass);
    assert_eq!(results[4].status, Status::Pass);
    assert_eq!(results[6].message, "2 focusable elements found");
}

#[test]
fn bundled_site_page_passes_structural_checks() {
    let mut p = std::env::temp_dir();
    p.push("unifhorce_audit_site.html");
    let html = fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site/index.html")).unwrap();
    fs::write(&p, html).unwrap();

    let results = audit::audit_source(&Source::File(p)).unwrap();
    assert_eq!(results.len(), 7);
    assert_eq!(audit::count_status(&results, Status::Fail), 0);
    assert_eq!(audit::count_status(&results, Status::Warning), 1);
}

#[test]
fn unreadable_site_is_an_error() {
    let mut p = std::env::temp_dir();
    p.push("unifhorce_audit_missing/index.html");
    assert!(audit::audit_source(&Source::File(p)).is_err());
}
