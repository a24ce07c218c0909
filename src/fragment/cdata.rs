//! CDATA wrapping utility

/// Wrap free text in a CDATA section.
///
/// An embedded `]]>` would terminate the section early, so it is split
/// across two sections with the standard `]]]]><![CDATA[>` break. The
/// envelope itself keeps `&`, `<` and `>` out of the markup.
pub fn wrap_cdata(input: &str) -> String {
    format!("<![CDATA[{}]]>", input.replace("]]>", "]]]]><![CDATA[>"))
}

#[cfg(test)]
mod tests {
    use super::wrap_cdata;

    #[test]
    fn plain_text() {
        assert_eq!("<![CDATA[hello]]>", wrap_cdata("hello"));
        assert_eq!("<![CDATA[]]>", wrap_cdata(""));
    }

    #[test]
    fn markup_characters() {
        assert_eq!(
            "<![CDATA[fish & <chips>]]>",
            wrap_cdata("fish & <chips>")
        );
    }

    #[test]
    fn embedded_terminator() {
        assert_eq!(
            "<![CDATA[a]]]]><![CDATA[>b]]>",
            wrap_cdata("a]]>b")
        );
        assert_eq!(
            "<![CDATA[]]]]><![CDATA[>]]]]><![CDATA[>]]>",
            wrap_cdata("]]>]]>")
        );
    }
}
