use std::error::Error;

use crate::controllers::interactive::InteractiveController;

/// Opens the display, drives `controller` from its event loop until the
/// window closes, then releases every resource it created.
pub trait DisplayLauncherPort {
    type Failure: Error + 'static;

    fn launch(&self, controller: InteractiveController) -> Result<(), Self::Failure>;
}
