use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("No window available")]
    NoWindow,
    #[error("No document attached to window")]
    NoDocument,
    #[error("Navigation to {0} failed")]
    Navigation(String),
}

/// The side effects page handlers need from the browser.
pub trait PageSurface {
    /// Smooth-scrolls the element with the given id to the top of the
    /// viewport. `Ok(false)` when no such element exists.
    fn scroll_to_anchor(&self, id: &str) -> Result<bool, SurfaceError>;

    /// Points the current browsing context at `url`.
    fn open_url(&self, url: &str) -> Result<(), SurfaceError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSurface;

impl BrowserSurface {
    fn window(&self) -> Result<web_sys::Window, SurfaceError> {
        web_sys::window().ok_or(SurfaceError::NoWindow)
    }
}

impl PageSurface for BrowserSurface {
    fn scroll_to_anchor(&self, id: &str) -> Result<bool, SurfaceError> {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let document = self.window()?.document().ok_or(SurfaceError::NoDocument)?;
        let target = if let Some(el) = document.get_element_by_id(id) {
            el
        } else {
            return Ok(false);
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(true)
    }

    fn open_url(&self, url: &str) -> Result<(), SurfaceError> {
        self.window()?
            .location()
            .set_href(url)
            .map_err(|_| SurfaceError::Navigation(url.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Records every side effect instead of touching a browser.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub anchors: Vec<String>,
        pub scrolled: RefCell<Vec<String>>,
        pub opened: RefCell<Vec<String>>,
        pub fail: bool,
    }

    impl RecordingSurface {
        pub fn with_anchors(anchors: &[&str]) -> Self {
            Self {
                anchors: anchors.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }

    impl PageSurface for RecordingSurface {
        fn scroll_to_anchor(&self, id: &str) -> Result<bool, SurfaceError> {
            if self.fail {
                return Err(SurfaceError::NoWindow);
            }
            if !self.anchors.iter().any(|a| a == id) {
                return Ok(false);
            }
            self.scrolled.borrow_mut().push(id.to_string());
            Ok(true)
        }

        fn open_url(&self, url: &str) -> Result<(), SurfaceError> {
            if self.fail {
                return Err(SurfaceError::Navigation(url.to_string()));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }
}
