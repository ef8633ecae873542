//! Askama template records for the two rendered task shapes.

use askama::Template;

/// Render tags as a YAML flow sequence of quoted strings.
pub(crate) fn tag_list<S: AsRef<str>>(tags: &[S]) -> String {
    let quoted: Vec<String> = tags
        .iter()
        .map(|tag| format!("\"{}\"", tag.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

#[derive(Template, Debug)]
#[template(path = "compile_variant.yml", escape = "none")]
pub(crate) struct CompileVariantTemplate<'a> {
    pub identity: &'a str,
    pub tags: String,
    pub sasl_param: &'a str,
    pub ssl_param: &'a str,
}

#[derive(Template, Debug)]
#[template(path = "test_task.yml", escape = "none")]
pub(crate) struct TestTaskTemplate<'a> {
    pub name: &'a str,
    pub tags: String,
    pub depends_on: &'a str,
    pub version: &'a str,
    pub topology: &'a str,
    pub auth: &'a str,
    pub ssl: &'a str,
    pub uri: &'a str,
}
