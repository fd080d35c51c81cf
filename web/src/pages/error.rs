//! Generic error page

use super::app::render_document;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorPage {
    pub status_code: Option<u16>,
}

impl ErrorPage {
    /// Status shown by the page; 404 when none was supplied
    pub fn status_code(&self) -> u16 {
        self.status_code.unwrap_or(404)
    }

    pub fn title(&self) -> &'static str {
        match self.status_code() {
            404 => "This page could not be found",
            500 => "Internal Server Error",
            _ => "An unexpected error has occurred",
        }
    }
}

pub fn render_error_page(page: &ErrorPage) -> String {
    let status = page.status_code();
    let title = page.title();

    let body = format!(
        r#"        <div class="flex flex-col h-full items-center justify-center dark:text-white">
            <div class="flex items-center gap-5">
                <h1 class="border-r pr-5 text-2xl font-medium">{status}</h1>
                <h2 class="text-sm">{title}.</h2>
            </div>
        </div>"#
    );

    render_document(&format!("{status}: {title}"), &body, "")
}
