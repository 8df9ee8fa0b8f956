//! `minijinja` reply renderer.

use minijinja::Environment;

use crate::assignment::domain::Reply;
use crate::assignment::ports::{RenderError, ReplyRenderer};

/// Renders reply templates with `minijinja`.
///
/// Templates use `{{ name }}` placeholders. Unknown placeholders render as
/// empty text. Values are inserted as-is: there is no HTML escaping, and
/// mustache's triple-brace `{{{ name }}}` form is a syntax error.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniJinjaRenderer;

impl MiniJinjaRenderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReplyRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, reply: &Reply) -> Result<String, RenderError> {
        let environment = Environment::new();
        environment
            .render_str(template, reply)
            .map_err(|error| RenderError::new(reply.kind(), error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::MiniJinjaRenderer;
    use crate::assignment::domain::{AlreadyAssignedVars, AssignedVars, HandleVars, Reply};
    use crate::assignment::ports::ReplyRenderer;

    #[test]
    fn renders_assigned_variables() {
        let reply = Reply::Assigned(AssignedVars {
            total_days: 7,
            unassigned_date: "08 March 2026".to_owned(),
            handle: "alice".to_owned(),
            pin_label: "Pinned".to_owned(),
        });
        let rendered = MiniJinjaRenderer::new()
            .render(
                "@{{ handle }} {{ total_days }} {{ unassigned_date }} {{ pin_label }}",
                &reply,
            )
            .expect("template should render");
        assert_eq!(rendered, "@alice 7 08 March 2026 Pinned");
    }

    #[test]
    fn renders_already_assigned_variables() {
        let reply = Reply::AlreadyAssigned(AlreadyAssignedVars {
            unassigned_date: "7".to_owned(),
            handle: "bob".to_owned(),
            assignee: "alice".to_owned(),
        });
        let rendered = MiniJinjaRenderer::new()
            .render("@{{ handle }} -> @{{ assignee }} ({{ unassigned_date }})", &reply)
            .expect("template should render");
        assert_eq!(rendered, "@bob -> @alice (7)");
    }

    #[test]
    fn unknown_placeholders_render_empty() {
        let reply = Reply::Unassigned(HandleVars {
            handle: "carol".to_owned(),
        });
        let rendered = MiniJinjaRenderer::new()
            .render("bye @{{ handle }}{{ assignee }}", &reply)
            .expect("template should render");
        assert_eq!(rendered, "bye @carol");
    }

    #[test]
    fn values_are_not_html_escaped() {
        let reply = Reply::Unassigned(HandleVars {
            handle: "<b>carol</b> & co".to_owned(),
        });
        let rendered = MiniJinjaRenderer::new()
            .render("bye {{ handle }}", &reply)
            .expect("template should render");
        assert_eq!(rendered, "bye <b>carol</b> & co");
    }

    #[test]
    fn triple_brace_placeholders_are_rejected() {
        let reply = Reply::Unassigned(HandleVars {
            handle: "carol".to_owned(),
        });
        let error = MiniJinjaRenderer::new()
            .render("bye {{{ handle }}}", &reply)
            .expect_err("triple braces are not a placeholder");
        assert_eq!(error.kind.as_str(), "unassigned");
    }

    #[test]
    fn malformed_template_is_reported() {
        let reply = Reply::AssignmentInterest(HandleVars {
            handle: "dave".to_owned(),
        });
        let error = MiniJinjaRenderer::new()
            .render("hello {{ handle", &reply)
            .expect_err("unterminated placeholder must fail");
        assert_eq!(error.kind.as_str(), "assignment-interest");
    }
}
