//! Library API integration tests
use newsnex_core::*;
use rstest::rstest;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

fn names(profiles: &[Profile]) -> Vec<&str> {
    profiles.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_profile_news_article() {
    let html = read_fixture("news_article.html");
    let extraction = Profiler::new().profile_html(&html, Some("https://news.example.com/acme-merger"));

    assert_eq!(names(&extraction.profiles), vec!["Jane Doe", "Acme Corp", "Mark Lee", "Sarah Johnson", "Tom Brown"]);
    assert_eq!(extraction.title.as_deref(), Some("Acme closes merger with rival firm | Daily Ledger"));
    assert_eq!(extraction.content_selector.as_deref(), Some("article"));
    assert_eq!(extraction.source_url.as_deref(), Some("https://news.example.com/acme-merger"));

    let jane = &extraction.profiles[0];
    assert_eq!(jane.role, "CEO");
    assert_eq!(jane.company, "Acme Corp");
    assert_eq!(jane.confidence, 95);
    assert_eq!(jane.quote, "Jane Doe, CEO of Acme Corp, said the deal was final.");

    let mark = &extraction.profiles[2];
    assert_eq!(mark.quote, "We expect strong growth");
    assert_eq!(mark.confidence, 85);

    let tom = &extraction.profiles[4];
    assert_eq!(tom.role, "Representative");
    assert_eq!(tom.company, "Globex");
    assert_eq!(tom.confidence, 90);
}

#[test]
fn test_boilerplate_never_contributes() {
    let html = read_fixture("news_article.html");
    let extraction = profile_html(&html);

    for excluded in [
        "Galaxy",
        "Share With",
        "Accept Cookies",
        "Home Page",
        "Business Desk",
        "Related Stories",
        "Peter Parker",
        "Daily Ledger",
        "Fake Person",
        "Hidden Person",
    ] {
        assert!(!extraction.content.contains(excluded), "{excluded} leaked into content");
        assert!(extraction.profiles.iter().all(|p| !p.name.contains(excluded)), "{excluded} became a profile");
    }
}

#[test]
fn test_container_article() {
    let html = read_fixture("container_article.html");
    let extraction = profile_html(&html);

    assert_eq!(extraction.content_selector.as_deref(), Some(".story-body"));
    assert_eq!(names(&extraction.profiles), vec!["Mark Smith", "Maria Lopez", "Anna Berg"]);

    assert_eq!(extraction.profiles[0].role, "leads research");
    assert_eq!(extraction.profiles[0].company, "Initech");
    assert_eq!(extraction.profiles[1].quote, "Prices will fall");
    assert_eq!(extraction.profiles[2].role, "chief economist");
    assert_eq!(extraction.profiles[2].company, "Organization");
}

#[test]
fn test_nav_only_page_is_empty() {
    let html = read_fixture("nav_only.html");

    assert_eq!(locate_content(&Document::parse(&html)), "");

    let extraction = profile_html(&html);
    assert!(extraction.profiles.is_empty());
    assert_eq!(extraction.title.as_deref(), Some("Site Index"));
}

#[test]
fn test_layout_wrapper_does_not_blank_article() {
    let html = r#"
        <body>
            <div class="layout with-sidebar">
                <article>
                    <p>Jane Doe, CEO of Acme Corp, said the deal was final.<span class="ad-slot">Galaxy Deals</span></p>
                </article>
                <div class="sidebar"><p>Peter Parker wins award.</p></div>
            </div>
        </body>
    "#;

    let extraction = profile_html(html);
    assert_eq!(names(&extraction.profiles), vec!["Jane Doe"]);
    assert_eq!(extraction.profiles[0].role, "CEO");
    assert_eq!(extraction.content, "Jane Doe, CEO of Acme Corp, said the deal was final.");
}

#[test]
fn test_pipeline_stages_compose() {
    let html = read_fixture("news_article.html");
    let doc = Document::parse_with_preprocessing(&html, &PreprocessConfig::default());

    let staged = deduplicate(extract_profiles(&locate_content(&doc)));
    assert_eq!(staged, profile_html(&html).profiles);
}

#[test]
fn test_highest_confidence_policy() {
    let html = r#"
        <article>
            <p>Reporters spotted Jane Doe at the venue.</p>
            <p>Jane Doe, CEO of Acme Corp, later confirmed the merger.</p>
        </article>
    "#;

    let first_seen = profile_html(html);
    assert_eq!(first_seen.profiles[0].confidence, 85);

    let config = ProfilerConfig::builder().dedup(DedupPolicy::HighestConfidence).build();
    let highest = Profiler::with_config(config).unwrap().profile_html(html, None);
    assert_eq!(highest.profiles[0].name, "Jane Doe");
    assert_eq!(highest.profiles[0].role, "CEO");
    assert_eq!(highest.profiles[0].confidence, 95);
    assert_eq!(highest.profiles.len(), first_seen.profiles.len());
}

#[test]
fn test_export_formats() {
    let html = read_fixture("news_article.html");
    let profiles = profile_html(&html).profiles;

    let csv = convert_to_csv(&profiles, &CsvConfig::default());
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("name,role,company,quote,confidence"));
    assert_eq!(lines.next(), Some(r#"Jane Doe,CEO,Acme Corp,"Jane Doe, CEO of Acme Corp, said the deal was final.",95"#));
    assert_eq!(csv.lines().count(), profiles.len() + 1);

    let json = convert_to_json(&profiles, &JsonConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), profiles.len());
    for object in array {
        let mut keys: Vec<&str> = object.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["company", "confidence", "name", "quote", "role"]);
    }

    let text = convert_to_text(&profiles, &TextConfig::default());
    assert_eq!(text.split("\n\n").count(), profiles.len());
}

#[rstest]
#[case("Jane Doe, CEO of Acme Corp, said the deal was final.", "Jane Doe", "CEO", "Acme Corp", 95)]
#[case("Mark Smith, who leads research at Initech, disagreed.", "Mark Smith", "leads research", "Initech", 95)]
#[case("Anna Berg, the chief economist, warned of a slowdown.", "Anna Berg", "chief economist", "Organization", 90)]
#[case("Tom Brown of Globex declined to comment.", "Tom Brown", "Representative", "Globex", 90)]
#[case("According to Sarah Johnson, rates will fall.", "Sarah Johnson", "Expert", "Organization", 85)]
#[case("Reporters spotted Jane Doe at the venue.", "Jane Doe", "Expert", "Organization", 85)]
fn test_rule_cascade(
    #[case] text: &str, #[case] name: &str, #[case] role: &str, #[case] company: &str, #[case] confidence: u8,
) {
    let profiles = deduplicate(extract_profiles(text));
    let profile = profiles.iter().find(|p| p.name == name).unwrap_or_else(|| panic!("{name} not found in {text:?}"));

    assert_eq!(profile.role, role);
    assert_eq!(profile.company, company);
    assert_eq!(profile.confidence, confidence);
}

#[rstest]
#[case("Galaxy Ultra launched today.")]
#[case("The Samsung Galaxy went on sale.")]
#[case("Shoppers queued for the Iphone Pro Max all night.")]
#[case("Xbox Series consoles sold out.")]
fn test_product_names_rejected(#[case] text: &str) {
    assert!(extract_profiles(text).is_empty(), "{text:?} produced a profile");
}

#[test]
fn test_edge_case_empty() {
    assert!(extract_profiles("").is_empty());
    assert_eq!(locate_content(&Document::parse("")), "");
    assert!(profile_html("").profiles.is_empty());
}

#[test]
fn test_edge_case_malformed() {
    let html = "<article><p>Jane Doe, CEO of Acme Corp, said <b>yes.<p>Tom Brown of Globex left.</article></div>";
    let profiles = profile_html(html).profiles;

    assert_eq!(profiles[0].name, "Jane Doe");
    assert!(names(&profiles).contains(&"Tom Brown"));
}

#[test]
fn test_edge_case_unicode() {
    let html = "<article><p>Mañana\u{a0}Jane\u{a0}Doe said the café was full.</p></article>";
    let profiles = profile_html(html).profiles;

    assert_eq!(names(&profiles), vec!["Jane Doe"]);
    assert_eq!(profiles[0].quote, "Jane Doe said the café was full.");
}

#[test]
fn test_normalize_text_api() {
    assert_eq!(normalize_text("  Jane \n\t Doe  "), "Jane Doe");
}
