//! Bridge pattern: input abstractions decoupled from output devices
//! Example: gestures and mouse drive either a screen or an audio device
//!
//! Run with: cargo run --bin bridge

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

/// Implementation side of the bridge.
trait OutputDevice {
    fn click(&self, log: &mut TraceLog);
    fn move_pointer(&self, log: &mut TraceLog);
    fn drag(&self, log: &mut TraceLog);
    fn zoom(&self, log: &mut TraceLog);
}

struct Screen;

impl OutputDevice for Screen {
    fn click(&self, log: &mut TraceLog) {
        log.add("Screen select");
    }

    fn move_pointer(&self, log: &mut TraceLog) {
        log.add("Screen move");
    }

    fn drag(&self, log: &mut TraceLog) {
        log.add("Screen drag");
    }

    fn zoom(&self, log: &mut TraceLog) {
        log.add("Screen zoom in");
    }
}

struct Audio;

impl OutputDevice for Audio {
    fn click(&self, log: &mut TraceLog) {
        log.add("Sound oink");
    }

    fn move_pointer(&self, log: &mut TraceLog) {
        log.add("Sound waves");
    }

    fn drag(&self, log: &mut TraceLog) {
        log.add("Sound screetch");
    }

    fn zoom(&self, log: &mut TraceLog) {
        log.add("Sound volume up");
    }
}

/// Abstraction side: touch vocabulary over any output device.
struct Gestures<'a> {
    output: &'a dyn OutputDevice,
}

impl<'a> Gestures<'a> {
    fn new(output: &'a dyn OutputDevice) -> Self {
        Gestures { output }
    }

    fn tap(&self, log: &mut TraceLog) {
        self.output.click(log);
    }

    fn swipe(&self, log: &mut TraceLog) {
        self.output.move_pointer(log);
    }

    fn pan(&self, log: &mut TraceLog) {
        self.output.drag(log);
    }

    fn pinch(&self, log: &mut TraceLog) {
        self.output.zoom(log);
    }
}

/// Abstraction side: mouse vocabulary over any output device.
struct Mouse<'a> {
    output: &'a dyn OutputDevice,
}

impl<'a> Mouse<'a> {
    fn new(output: &'a dyn OutputDevice) -> Self {
        Mouse { output }
    }

    fn click(&self, log: &mut TraceLog) {
        self.output.click(log);
    }

    fn move_cursor(&self, log: &mut TraceLog) {
        self.output.move_pointer(log);
    }

    fn down(&self, log: &mut TraceLog) {
        self.output.drag(log);
    }

    fn wheel(&self, log: &mut TraceLog) {
        self.output.zoom(log);
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let screen = Screen;
    let audio = Audio;
    let hand = Gestures::new(&screen);
    let mouse = Mouse::new(&audio);

    hand.tap(&mut log);
    hand.swipe(&mut log);
    hand.pinch(&mut log);

    mouse.click(&mut log);
    mouse.move_cursor(&mut log);
    mouse.wheel(&mut log);

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Bridge"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_patterns::CapturePresenter;

    fn trace_of(actions: impl FnOnce(&mut TraceLog)) -> String {
        let mut log = TraceLog::new();
        actions(&mut log);
        let mut out = CapturePresenter::new();
        log.show(&mut out);
        out.single().to_string()
    }

    #[test]
    fn gestures_work_against_any_device() {
        let on_screen = trace_of(|log| Gestures::new(&Screen).pan(log));
        let on_audio = trace_of(|log| Gestures::new(&Audio).pan(log));
        assert_eq!(on_screen, "Screen drag\n");
        assert_eq!(on_audio, "Sound screetch\n");
    }

    #[test]
    fn mouse_and_gestures_share_the_device_contract() {
        let gesture = trace_of(|log| Gestures::new(&Screen).pinch(log));
        let mouse = trace_of(|log| Mouse::new(&Screen).wheel(log));
        assert_eq!(gesture, mouse);

        let drag_by_hand = trace_of(|log| Gestures::new(&Audio).pan(log));
        let drag_by_mouse = trace_of(|log| Mouse::new(&Audio).down(log));
        assert_eq!(drag_by_hand, drag_by_mouse);
    }

    #[test]
    fn trace_drives_both_pairings() {
        let mut out = CapturePresenter::new();
        run(&mut out);
        assert_eq!(
            out.single(),
            "Screen select\n\
             Screen move\n\
             Screen zoom in\n\
             Sound oink\n\
             Sound waves\n\
             Sound volume up\n"
        );
    }
}
