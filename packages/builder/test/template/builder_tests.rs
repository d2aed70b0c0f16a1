/**
 * Template Builder Tests
 *
 * End-to-end builds compared through their dump
 */

#[path = "util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::{build, build_dump, build_error};
    use serde_json::json;
    use tagged_html::{html, BuildError, BuildOptions, Built, HtmlBuilder, SlotKind, Value};

    #[test]
    fn should_work() {
        assert_eq!(
            build_dump(&["<div>test</div>"], vec![]),
            json!({"name": "DIV", "children": ["test"]})
        );
    }

    #[test]
    fn should_return_fragment_with_many_children() {
        assert_eq!(
            build_dump(&["<b>foo</b><b>bar</b>"], vec![]),
            json!({
                "name": "DOCUMENT_FRAGMENT",
                "children": [
                    {"name": "B", "children": ["foo"]},
                    {"name": "B", "children": ["bar"]},
                ],
            })
        );
    }

    #[test]
    fn should_drop_empty_text_nodes() {
        assert_eq!(
            build_dump(&["  <span> A </span>   <span>   B  </span>  "], vec![]),
            json!({
                "name": "DOCUMENT_FRAGMENT",
                "children": [
                    {"name": "SPAN", "children": [" A "]},
                    {"name": "SPAN", "children": ["   B  "]},
                ],
            })
        );
    }

    #[test]
    fn should_return_just_text_nodes() {
        assert_eq!(build_dump(&["what's up"], vec![]), json!("what's up"));
    }

    #[test]
    fn should_work_with_nested_templates() {
        let inner = build(&["<bar>baz</bar>"], vec![]);
        assert_eq!(
            build_dump(&["<foo>", "</foo>"], vec![inner.into()]),
            json!({
                "name": "FOO",
                "children": [{"name": "BAR", "children": ["baz"]}],
            })
        );
    }

    #[test]
    fn should_properly_handle_fragment_nesting() {
        let first = build(&["<b>1</b><b>2</b>"], vec![]);
        let second = build(&["<b>3</b><b>4</b>"], vec![]);
        assert_eq!(
            build_dump(&["", "", ""], vec![first.into(), second.into()]),
            json!({
                "name": "DOCUMENT_FRAGMENT",
                "children": [
                    {"name": "B", "children": ["1"]},
                    {"name": "B", "children": ["2"]},
                    {"name": "B", "children": ["3"]},
                    {"name": "B", "children": ["4"]},
                ],
            })
        );
    }

    #[test]
    fn should_interpolate_attribute_names() {
        let name = format!("{}{}", "w", "oo");
        assert_eq!(
            build_dump(&["<div ", "=bar></div>"], vec![name.into()]),
            json!({"name": "DIV", "attr": "woo=bar"})
        );
    }

    #[test]
    fn should_do_many_interpolations_inside_attribute_name() {
        assert_eq!(
            build_dump(&["<div ", "-", "-", "=bar></div>"], vec!["f".into(), "o".into(), "o".into()]),
            json!({"name": "DIV", "attr": "f-o-o=bar"})
        );
    }

    #[test]
    fn should_do_many_interpolations_inside_attribute_value() {
        assert_eq!(
            build_dump(&["<div foo=", "-", "-", "></div>"], vec!["b".into(), "a".into(), "r".into()]),
            json!({"name": "DIV", "attr": "foo=b-a-r"})
        );
    }

    #[test]
    fn should_support_true_boolean_attribute_values() {
        assert_eq!(
            build_dump(&["<button disabled=", "></button>"], vec![true.into()]),
            json!({"name": "BUTTON", "attr": "disabled"})
        );
    }

    #[test]
    fn should_support_false_boolean_attribute_values() {
        assert_eq!(
            build_dump(&["<button disabled=", "></button>"], vec![false.into()]),
            json!({"name": "BUTTON"})
        );
    }

    #[test]
    fn should_omit_attribute_for_null_value() {
        assert_eq!(
            build_dump(&["<a href=", ">x</a>"], vec![None::<&str>.into()]),
            json!({"name": "A", "children": ["x"]})
        );
    }

    #[test]
    fn should_do_many_interpolations_inside_both_attribute_name_and_value() {
        let values: Vec<Value> = ["f", "o", "o", "b", "a", "r"].into_iter().map(Value::from).collect();
        assert_eq!(
            build_dump(&["<div ", "-", "-", "=", "-", "-", "></div>"], values),
            json!({"name": "DIV", "attr": "f-o-o=b-a-r"})
        );
    }

    #[test]
    fn should_interpolate_multiple_attribute_names() {
        assert_eq!(
            build_dump(&["<div ", "=bar ", "=baz></div>"], vec!["w1".into(), "w2".into()]),
            json!({"name": "DIV", "attr": "w1=bar w2=baz"})
        );
    }

    #[test]
    fn should_interpolate_attribute_values() {
        assert_eq!(
            build_dump(&["<div class=", "-bar></div>"], vec![(1 + 1).into()]),
            json!({"name": "DIV", "attr": "class=2-bar"})
        );
    }

    #[test]
    fn should_work_with_arrays() {
        let items: Vec<Built> = [1, 2].iter().map(|e| build(&["<li>", "</li>"], vec![(*e).into()])).collect();
        assert_eq!(
            build_dump(&["<ul>", ""], vec![items.into()]),
            json!({
                "name": "UL",
                "children": [
                    {"name": "LI", "children": ["1"]},
                    {"name": "LI", "children": ["2"]},
                ],
            })
        );
    }

    #[test]
    fn should_interpolate_tag_names() {
        assert_eq!(
            build_dump(&["<", " id=x>hi</", ">"], vec!["section".into(), "section".into()]),
            json!({"name": "SECTION", "attr": "id=x", "children": ["hi"]})
        );
    }

    #[test]
    fn should_keep_attributes_in_insertion_order_and_overwrite_in_place() {
        assert_eq!(
            build_dump(&["<p a=1 b=2 ", "=3></p>"], vec!["a".into()]),
            json!({"name": "P", "attr": "a=3 b=2"})
        );
    }

    #[test]
    fn should_remove_earlier_attribute_on_false() {
        assert_eq!(
            build_dump(&["<input checked checked=", ">"], vec![false.into()]),
            json!({"name": "INPUT"})
        );
    }

    #[test]
    fn should_lowercase_attribute_names() {
        assert_eq!(
            build_dump(&["<p DATA-X=1></p>"], vec![]),
            json!({"name": "P", "attr": "data-x=1"})
        );
    }

    #[test]
    fn should_skip_empty_interpolated_attribute() {
        assert_eq!(
            build_dump(&["<input ", ">"], vec!["".into()]),
            json!({"name": "INPUT"})
        );
    }

    #[test]
    fn should_not_decode_interpolated_text() {
        assert_eq!(
            build_dump(&["<p>&amp;", "</p>"], vec!["&amp;".into()]),
            json!({"name": "P", "children": ["&", "&amp;"]})
        );
    }

    #[test]
    fn should_not_merge_adjacent_text() {
        assert_eq!(
            build_dump(&["<p>a", "c</p>"], vec!["b".into()]),
            json!({"name": "P", "children": ["a", "b", "c"]})
        );
    }

    #[test]
    fn should_skip_null_and_empty_children() {
        assert_eq!(
            build_dump(&["<p>", "", "</p>"], vec![Value::Null, "".into()]),
            json!({"name": "P"})
        );
    }

    #[test]
    fn should_keep_interior_whitespace() {
        assert_eq!(
            build_dump(&["<ul>\n  <li>a</li>\n</ul>"], vec![]),
            json!({"name": "UL", "children": ["\n  ", {"name": "LI", "children": ["a"]}, "\n"]})
        );
    }

    #[test]
    fn should_build_void_and_self_closing_elements() {
        assert_eq!(
            build_dump(&["<p>a<br>b<x-icon/>c</p>"], vec![]),
            json!({"name": "P", "children": ["a", {"name": "BR"}, "b", {"name": "X-ICON"}, "c"]})
        );
    }

    #[test]
    fn should_ignore_comments() {
        assert_eq!(
            build_dump(&["<!-- note --><p>x</p>"], vec![]),
            json!({"name": "P", "children": ["x"]})
        );
    }

    #[test]
    fn should_return_empty_fragment_for_empty_template() {
        assert_eq!(build_dump(&[""], vec![]), json!({"name": "DOCUMENT_FRAGMENT"}));
        assert_eq!(build_dump(&["   "], vec![]), json!({"name": "DOCUMENT_FRAGMENT"}));
    }

    #[test]
    fn should_build_through_macro() {
        let inner = html!(["<i>", "</i>"], 3).unwrap();
        let built = html!(["<p class=", ">", "</p>"], "note", inner).unwrap();
        assert_eq!(built.to_html(), "<p class=\"note\"><i>3</i></p>");
    }

    #[test]
    fn should_respect_options() {
        let builder = HtmlBuilder::new().with_options(
            BuildOptions::default()
                .with_drop_root_whitespace(false)
                .with_self_closing_tags(false),
        );
        let built = builder.build(&[" <b/>x"], vec![]).unwrap();
        let fragment = built.as_fragment().unwrap();
        assert_eq!(fragment.len(), 2);
        assert_eq!(fragment.children[1].as_element().unwrap().children.len(), 1);
    }

    #[test]
    fn should_normalize_line_endings() {
        assert_eq!(
            build_dump(&["<pre>a\r\nb\rc</pre>"], vec![]),
            json!({"name": "PRE", "children": ["a\nb\nc"]})
        );
    }

    #[test]
    fn should_reject_value_count_mismatch() {
        let error = build_error(&["<p>", "</p>"], vec![]);
        assert!(error.is_parse_error());
    }

    #[test]
    fn should_reject_mismatched_closing_tag() {
        let error = build_error(&["<div><span></div>"], vec![]);
        assert!(error.is_parse_error());
        assert!(error.to_string().contains("Unexpected closing tag"));
    }

    #[test]
    fn should_reject_unterminated_tag() {
        assert!(build_error(&["<div class=\"a"], vec![]).is_parse_error());
    }

    #[test]
    fn should_reject_boolean_child() {
        assert_eq!(
            build_error(&["<p>", "</p>"], vec![true.into()]),
            BuildError::UnsupportedInterpolation { kind: SlotKind::Child, found: "boolean" }
        );
    }

    #[test]
    fn should_reject_element_in_attribute_value() {
        let element = build(&["<b></b>"], vec![]);
        let error = build_error(&["<p title=", "></p>"], vec![element.into()]);
        assert_eq!(
            error,
            BuildError::UnsupportedInterpolation { kind: SlotKind::WholeAttrValue, found: "element" }
        );
    }

    #[test]
    fn should_reject_invalid_tag_name() {
        assert!(build_error(&["<", "></p>"], vec!["1p".into()]).is_parse_error());
    }
}
