use crate::core::menu::{prompt_selection, BAUD_RATES};
use crate::domain::error::SerialPickResult;
use crate::infrastructure::launcher::SessionLauncher;
use std::io::{Read, Write};
use tracing::info;

/// Interactive device and baud rate selection followed by a session hand-off
pub struct Picker<L: SessionLauncher> {
    launcher: L,
}

impl<L: SessionLauncher> Picker<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Run both prompts over `devices` and launch the session.
    ///
    /// Returns the exit code of the terminal program.
    pub fn run<R: Read, W: Write>(
        &self,
        devices: &[String],
        input: &mut R,
        output: &mut W,
    ) -> SerialPickResult<i32> {
        writeln!(output, "Available serial devices:")?;
        let device = prompt_selection(input, output, "Select a device: ", devices)?;

        writeln!(output, "Available baud rates:")?;
        let baud_rate = *prompt_selection(input, output, "Select a baud rate: ", &BAUD_RATES[..])?;

        info!("Selected {} at {} baud", device, baud_rate);
        writeln!(output, "Connecting to {} at {} baud...", device, baud_rate)?;
        output.flush()?;

        self.launcher.launch_session(device, baud_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SerialPickError;
    use std::cell::RefCell;
    use std::io::Cursor;

    #[derive(Default)]
    struct RecordingLauncher {
        calls: RefCell<Vec<(String, u32)>>,
    }

    impl SessionLauncher for RecordingLauncher {
        fn launch_session(&self, device: &str, baud_rate: u32) -> SerialPickResult<i32> {
            self.calls.borrow_mut().push((device.to_string(), baud_rate));
            Ok(0)
        }
    }

    fn devices() -> Vec<String> {
        vec!["/dev/ttyUSB0".to_string(), "/dev/ttyUSB1".to_string()]
    }

    #[test]
    fn test_second_device_fastest_baud() {
        let picker = Picker::new(RecordingLauncher::default());
        let mut input = Cursor::new("2\n5\n");
        let mut output = Vec::new();

        let code = picker.run(&devices(), &mut input, &mut output).unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            *picker.launcher().calls.borrow(),
            vec![("/dev/ttyUSB1".to_string(), 115200)]
        );

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Connecting to /dev/ttyUSB1 at 115200 baud..."));
    }

    #[test]
    fn test_invalid_device_does_not_launch() {
        let picker = Picker::new(RecordingLauncher::default());
        let mut input = Cursor::new("3\n1\n");
        let mut output = Vec::new();

        let result = picker.run(&devices(), &mut input, &mut output);
        assert!(matches!(result, Err(SerialPickError::InvalidSelection(_))));
        assert!(picker.launcher().calls.borrow().is_empty());
    }
}
