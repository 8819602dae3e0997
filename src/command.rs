use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Pause,
    Dismiss,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE, KeyCode::Char(' ' | 'p') | KeyCode::Esc) => Some(Command::Pause),
            (_, KeyCode::Enter) => Some(Command::Dismiss),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, Some(Command::Up))]
    #[case(KeyCode::Char('w'), Some(Command::Up))]
    #[case(KeyCode::Right, Some(Command::Right))]
    #[case(KeyCode::Char('d'), Some(Command::Right))]
    #[case(KeyCode::Down, Some(Command::Down))]
    #[case(KeyCode::Char('s'), Some(Command::Down))]
    #[case(KeyCode::Left, Some(Command::Left))]
    #[case(KeyCode::Char('a'), Some(Command::Left))]
    #[case(KeyCode::Char(' '), Some(Command::Pause))]
    #[case(KeyCode::Esc, Some(Command::Pause))]
    #[case(KeyCode::Enter, Some(Command::Dismiss))]
    #[case(KeyCode::Char('q'), Some(Command::Quit))]
    #[case(KeyCode::Char('x'), None)]
    #[case(KeyCode::Tab, None)]
    fn unmodified_keys(#[case] code: KeyCode, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(KeyEvent::from(code)), cmd);
    }

    #[test]
    fn ctrl_c() {
        assert_eq!(
            Command::from_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn shifted_letters_ignored() {
        assert_eq!(
            Command::from_key_event(KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT)),
            None
        );
    }
}
