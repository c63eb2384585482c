use super::*;

#[test]
fn renders_bold() {
    let out = render_markdown_html("**DMRB** rocks");
    assert!(out.contains("<strong>DMRB</strong>"));
}

#[test]
fn renders_bullet_lists() {
    let out = render_markdown_html("- one\n- two");
    assert!(out.contains("<ul>"));
    assert_eq!(out.matches("<li>").count(), 2);
}

#[test]
fn single_newlines_become_breaks() {
    let out = render_markdown_html("line one\nline two");
    assert!(out.contains("<br />"));
}

#[test]
fn raw_html_is_dropped() {
    let out = render_markdown_html("hi <script>alert(1)</script> there");
    assert!(!out.contains("<script>"));
    let block = render_markdown_html("<div onclick=\"x()\">boom</div>");
    assert!(!block.contains("onclick"));
}

#[test]
fn every_canned_reply_renders() {
    for rule in responder::rules::RULES {
        assert!(!render_markdown_html(rule.text).is_empty());
    }
}

#[test]
fn script_links_are_blanked() {
    let out = render_markdown_html("[click](javascript:alert(document.cookie))");
    assert!(!out.contains("javascript"), "{out}");
    assert!(out.contains("click"));

    let out = render_markdown_html("[x](JavaScript:alert(1)) <javascript:alert(1)>");
    assert!(!out.to_lowercase().contains("href=\"javascript"), "{out}");
}

#[test]
fn data_and_vbscript_images_are_blanked() {
    let out = render_markdown_html("![pic](data:text/html;base64,PHNjcmlwdD4=)");
    assert!(!out.contains("data:"), "{out}");
    let out = render_markdown_html("[v](vbscript:msgbox(1))");
    assert!(!out.contains("vbscript"), "{out}");
}

#[test]
fn entity_encoded_scheme_is_blanked() {
    let out = render_markdown_html("[x](javascript&#58;alert(1))");
    assert!(!out.contains("alert"), "{out}");
}

#[test]
fn safe_links_are_kept() {
    let out = render_markdown_html("[GitHub](https://github.com/mga210)");
    assert!(out.contains("href=\"https://github.com/mga210\""));
    let out = render_markdown_html("[mail](mailto:mgonzalez869@gmail.com)");
    assert!(out.contains("href=\"mailto:mgonzalez869@gmail.com\""));
    let out = render_markdown_html("[projects](#projects) [resume](/files/resume.pdf)");
    assert!(out.contains("href=\"#projects\""));
    assert!(out.contains("href=\"/files/resume.pdf\""));
}

#[test]
fn colon_after_path_is_relative() {
    assert!(is_safe_url("docs/a:b"));
    assert!(is_safe_url("?q=javascript:x"));
    assert!(!is_safe_url(" javascript:alert(1)"));
    assert!(!is_safe_url("java\tscript:alert(1)"));
}
