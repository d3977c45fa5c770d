/// Id of the `<script type="application/json">` block holding page settings
pub const CONFIG_ELEMENT_ID: &str = "homescout-config";

/// Text of the page's settings block, `None` when the page has none
pub fn page_config_text() -> Option<String> {
    gloo::utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
}
