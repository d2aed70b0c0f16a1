/**
 * HTML Serializer Tests
 *
 * Built trees rendered back to markup
 */

#[path = "util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::build;

    fn round_trip(html: &str) -> String {
        build(&[html], vec![]).to_html()
    }

    #[test]
    fn should_support_element() {
        assert_eq!(round_trip("<p></p>"), "<p></p>");
    }

    #[test]
    fn should_support_attributes() {
        assert_eq!(round_trip("<p k=\"value\"></p>"), "<p k=\"value\"></p>");
        assert_eq!(round_trip("<input disabled>"), "<input disabled>");
    }

    #[test]
    fn should_support_text() {
        assert_eq!(round_trip("some text"), "some text");
    }

    #[test]
    fn should_support_fragments() {
        assert_eq!(round_trip("<b>1</b> <i>2</i>"), "<b>1</b><i>2</i>");
    }

    #[test]
    fn should_escape_text_and_attribute_values() {
        let built = build(&["<p title=", ">", "</p>"], vec!["a\"b".into(), "1 < 2 & 3".into()]);
        assert_eq!(built.to_html(), "<p title=\"a&quot;b\">1 &lt; 2 &amp; 3</p>");
    }

    #[test]
    fn should_close_self_closed_elements() {
        assert_eq!(round_trip("<div><span/><br/></div>"), "<div><span></span><br></div>");
    }

    #[test]
    fn should_display_as_html() {
        let built = build(&["<ul><li>a</li></ul>"], vec![]);
        assert_eq!(format!("{}", built), "<ul><li>a</li></ul>");
    }
}
