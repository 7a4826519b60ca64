use keyboard_query::{DeviceQuery, DeviceState};

use node_control::bsp::pin::Pin;

/// Digital pin driven by the state of one keyboard key.
pub struct KeyboardPin {
    device_state: DeviceState,
    key_code: u16,
}

impl KeyboardPin {
    /// Factory function to create a [KeyboardPin]
    pub fn create(key_code: u16) -> KeyboardPin {
        let device_state = DeviceState::new();
        KeyboardPin {
            device_state,
            key_code,
        }
    }
}

impl Pin for KeyboardPin {
    /// returns true while the key is held down
    fn is_down(&self) -> bool {
        let keys = &self.device_state.get_keys();
        keys.contains(&self.key_code)
    }
}
