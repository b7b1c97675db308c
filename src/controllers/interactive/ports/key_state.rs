use crate::controllers::interactive::types::ControlKey;

pub trait KeyStatePort {
    fn is_key_down(&self, key: ControlKey) -> bool;
}
