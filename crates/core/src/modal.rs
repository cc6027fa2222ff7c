/// A dialog owned by a view. Replaces the page-global modal instances of a scripted page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    id: &'static str,
    title: &'static str,
    /// 0 for a top-level dialog, 1 for one opened on top of it.
    level: u8,
    body: String,
    open: bool,
}

impl Modal {
    pub fn new(id: &'static str, title: &'static str) -> Self {
        Self {
            id,
            title,
            level: 0,
            body: String::new(),
            open: false,
        }
    }

    /// A dialog that opens above another one.
    pub fn stacked(id: &'static str, title: &'static str) -> Self {
        Self {
            level: 1,
            ..Self::new(id, title)
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, html: String) {
        self.body = html;
    }

    pub fn show(&mut self) {
        self.open = true;
    }

    pub fn hide(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
