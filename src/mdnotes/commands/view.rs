use crate::commands::{CmdMessage, CmdResult, ViewedNote};
use crate::error::Result;
use crate::render::{render_or_raw, Renderer};
use crate::store::NoteStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewFormat {
    #[default]
    Raw,
    Html,
}

pub fn run<S, R>(store: &S, renderer: &R, title: &str, format: ViewFormat) -> Result<CmdResult>
where
    S: NoteStore + ?Sized,
    R: Renderer + ?Sized,
{
    let content = store.read(title)?;

    let mut result = CmdResult::default();
    if content.trim().is_empty() {
        result.add_message(CmdMessage::info("No content to display"));
    }

    let body = match format {
        ViewFormat::Raw => content,
        ViewFormat::Html => render_or_raw(renderer, &content),
    };
    Ok(result.with_viewed(ViewedNote {
        title: title.trim().to_string(),
        body,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoteError;
    use crate::model::BackendKind;
    use crate::render::MarkdownRenderer;
    use crate::test_utils::TestEnv;

    #[test]
    fn shows_raw_body() {
        let env = TestEnv::new();
        let mut store = env.store(BackendKind::Flat);
        store.create("Plan", "# Steps").unwrap();

        let result = run(&store, &MarkdownRenderer, " Plan ", ViewFormat::Raw).unwrap();
        let viewed = result.viewed.unwrap();
        assert_eq!(viewed.title, "Plan");
        assert_eq!(viewed.body, "# Steps");
    }

    #[test]
    fn renders_html_on_request() {
        let env = TestEnv::new();
        let mut store = env.store(BackendKind::Aggregate);
        store.create("Plan", "# Steps").unwrap();

        let result = run(&store, &MarkdownRenderer, "Plan", ViewFormat::Html).unwrap();
        assert!(result.viewed.unwrap().body.contains("<h1>Steps</h1>"));
    }

    #[test]
    fn empty_note_gets_notice() {
        let env = TestEnv::new();
        let mut store = env.store(BackendKind::Flat);
        store.create("Blank", "").unwrap();

        let result = run(&store, &MarkdownRenderer, "Blank", ViewFormat::Raw).unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn missing_note_is_not_found() {
        let env = TestEnv::new();
        let store = env.store(BackendKind::Flat);
        assert!(matches!(
            run(&store, &MarkdownRenderer, "Ghost", ViewFormat::Raw),
            Err(NoteError::NotFound(_))
        ));
    }
}
