use outstanding_ansi::{
    available_attributes, concat, join, plain, render, style, Color, Error, OutputMode, Style,
    StyleSpec, StyledText, Table,
};

fn fg(name: &str) -> StyleSpec {
    StyleSpec::new().fg(name)
}

#[test]
fn test_plain_identity() {
    for text in ["", "hello", "tab\tand\nnewline", "ünïcödé"] {
        assert_eq!(render(&plain(text)), text);
    }
}

#[test]
fn test_reference_renderings() {
    let red = style("You", &fg("red")).unwrap();
    assert_eq!(render(&red), "\x1b[31mYou\x1b[39m");

    let bold = style("You", &StyleSpec::new().attr("bold")).unwrap();
    assert_eq!(render(&bold), "\x1b[1mYou\x1b[21m");

    let spec = StyleSpec::new().fg("black").bg("blue").attr("bold");
    let full = style("Hello You, how are you?", &spec).unwrap();
    assert_eq!(
        render(&full),
        "\x1b[30m\x1b[44m\x1b[1mHello You, how are you?\x1b[21m\x1b[49m\x1b[39m"
    );
}

#[test]
fn test_nested_concat_restores_blue() {
    let you = style("You", &fg("red")).unwrap();
    let result = concat(
        &style("Hello, Are ", &fg("blue")).unwrap(),
        &concat(&you, &style(" Well", &fg("blue")).unwrap()),
    );
    assert_eq!(
        render(&result),
        "\x1b[34mHello, Are \x1b[31mYou\x1b[34m Well\x1b[39m"
    );
    // Only the outermost close resets to the terminal default.
    assert_eq!(render(&result).matches("\x1b[39m").count(), 1);
}

#[test]
fn test_nested_concat_left_grouped_restores_blue() {
    let you = style("You", &fg("red")).unwrap();
    let result = concat(
        &concat(&style("Hello, Are ", &fg("blue")).unwrap(), &you),
        &style(" Well", &fg("blue")).unwrap(),
    );
    assert_eq!(
        render(&result),
        "\x1b[34mHello, Are \x1b[31mYou\x1b[34m Well\x1b[39m"
    );
}

#[test]
fn test_restyling_styled_text_opens_outer_style() {
    let you = style("You", &fg("red")).unwrap();
    let text = style(&you, &fg("blue")).unwrap();
    assert!(render(&text).starts_with("\x1b[34m"));
    assert_eq!(text.leading_state().foreground(), Color::Blue);
}

#[test]
fn test_nested_style_restores_blue() {
    let you = style("You", &fg("red")).unwrap();
    let sentence = "Hello, Are " + you + " Well";
    let result = style(sentence, &fg("blue")).unwrap();
    insta::assert_snapshot!(
        result.render_with(OutputMode::Debug),
        @"{fg.blue}Hello, Are {fg.red}You{fg.blue} Well{fg.default}"
    );
}

#[test]
fn test_flattened_interpolation_is_not_restored() {
    let you = style("You", &fg("red")).unwrap();
    let flat = format!("Hello, Are {} Well", you);
    let result = style(flat, &fg("blue")).unwrap();
    assert_eq!(
        render(&result),
        "\x1b[34mHello, Are \x1b[31mYou\x1b[39m Well\x1b[39m"
    );
}

#[test]
fn test_structured_interpolation_is_restored() {
    let you = style("You", &fg("red")).unwrap();
    let template = StyledText::interpolate("Hello, Are {} Well", &[you]).unwrap();
    let result = style(template, &fg("blue")).unwrap();
    insta::assert_snapshot!(
        result.render_with(OutputMode::Debug),
        @"{fg.blue}Hello, Are {fg.red}You{fg.blue} Well{fg.default}"
    );
}

#[test]
fn test_join_folds_left_to_right() {
    let parts = ["a", "b", "c"]
        .into_iter()
        .zip([Color::Red, Color::Red, Color::Green])
        .map(|(text, color)| Style::new().fg(color).apply_to(text));
    let joined = join(parts);
    insta::assert_snapshot!(
        joined.render_with(OutputMode::Debug),
        @"{fg.red}ab{fg.green}c{fg.default}"
    );
    assert_eq!(joined.plain_text(), "abc");
}

#[test]
fn test_attributes_inside_colors() {
    let word = style("bold", &StyleSpec::new().attr("bold").attr("underline")).unwrap();
    let line = style("a " + word + " b", &StyleSpec::new().fg("yellow").bg("black")).unwrap();
    insta::assert_snapshot!(
        line.render_with(OutputMode::Debug),
        @"{fg.yellow}{bg.black}a {attr.bold}{attr.underline}bold{attr.ununderline}{attr.unbold} b{bg.default}{fg.default}"
    );
}

#[test]
fn test_unknown_name_propagates() {
    let err = style("x", &StyleSpec::new().attr("sparkle")).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownStyleName {
            table: Table::Attribute,
            name: "sparkle".to_string(),
        }
    );
    assert_eq!(err.to_string(), "unknown attribute style name 'sparkle'");
}

#[test]
fn test_available_attributes_lists_all_toggles() {
    let attributes = available_attributes();
    assert_eq!(attributes.len(), 16);
    for name in ["blink", "bold", "conceal", "faint", "italic", "reverse", "strike", "underline"] {
        assert!(attributes.contains(name), "missing {name}");
        assert!(attributes.contains(format!("un{name}").as_str()), "missing un{name}");
    }
}

#[test]
fn test_styled_text_shared_across_threads() {
    let you = style("You", &fg("red")).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let you = you.clone();
            std::thread::spawn(move || style(&you, &fg("blue")).map(|text| text.render()))
        })
        .collect();
    for handle in handles {
        // Blue opens first and is restored before the final close.
        assert_eq!(
            handle.join().unwrap().unwrap(),
            "\x1b[34m\x1b[31mYou\x1b[34m\x1b[39m"
        );
    }
}
