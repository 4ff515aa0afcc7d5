//! Navigation adapter — opens the proxied destination via `window.open`.

use relay_core::ports::NavigatorPort;
use relay_types::{RelayError, Result};

pub struct WindowNavigator;

impl NavigatorPort for WindowNavigator {
    fn open(&self, url: &str) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| RelayError::Navigation("No window object".to_string()))?;
        // a blocked popup comes back as Ok(None), not as an error
        window
            .open_with_url(url)
            .map_err(|e| RelayError::Navigation(format!("{:?}", e)))?;
        Ok(())
    }
}
