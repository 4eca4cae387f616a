use std::rc::Rc;

use libs::log;

use crate::popup::{Host, WindowOpener, WindowRequest};

/// Opens share links in the user's default browser.
///
/// Browsers started this way have no surface to wait on, so deferred
/// opening reports [`OpenOutcome::NoSurface`](crate::OpenOutcome::NoSurface).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemBrowser;

impl WindowOpener for SystemBrowser {
    fn open_window(&self, request: &WindowRequest) {
        log::info!("Opening browser with share URL");
        if let Err(why) = webbrowser::open(&request.url) {
            log::warn!(
                "Error when trying to open an URL in your browser: {:?}. \
                 Please navigate here manually: {}",
                why,
                request.url
            );
        }
    }
}

impl Host for SystemBrowser {
    fn window(&self) -> Rc<dyn WindowOpener> {
        Rc::new(*self)
    }
}
