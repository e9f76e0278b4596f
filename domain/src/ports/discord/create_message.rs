#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CreateMessage {
    pub content: Option<String>,
}

impl CreateMessage {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}
