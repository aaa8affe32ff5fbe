use twin_engine::{BodyKind, Command, Direction};

/// DOM `keyCode` values for the default bindings.
pub mod keys {
    pub const ENTER: u32 = 13;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const I: u32 = 73;
    pub const M: u32 = 77;
    pub const P: u32 = 80;
    pub const R: u32 = 82;
    pub const W: u32 = 87;
}

// Custom event kinds (page buttons → Rust)
pub const CUSTOM_RESET: u32 = 1;
pub const CUSTOM_PAUSE: u32 = 2;
pub const CUSTOM_INSTRUCTIONS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerKeys {
    pub left: u32,
    pub right: u32,
    pub jump: u32,
}

/// Key codes → session commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub red: PlayerKeys,
    pub blue: PlayerKeys,
    pub start: u32,
    pub instructions: u32,
    pub pause: u32,
    pub restart: u32,
    pub menu: u32,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            red: PlayerKeys {
                left: keys::LEFT,
                right: keys::RIGHT,
                jump: keys::UP,
            },
            blue: PlayerKeys {
                left: keys::A,
                right: keys::D,
                jump: keys::W,
            },
            start: keys::ENTER,
            instructions: keys::I,
            pause: keys::P,
            restart: keys::R,
            menu: keys::M,
        }
    }
}

impl KeyMap {
    pub fn key_down(&self, key_code: u32) -> Option<Command> {
        if let Some(cmd) = self.movement(key_code, true) {
            return Some(cmd);
        }
        match key_code {
            k if k == self.start => Some(Command::Start),
            k if k == self.instructions => Some(Command::ToggleInstructions),
            k if k == self.pause => Some(Command::TogglePause),
            k if k == self.restart => Some(Command::Restart),
            k if k == self.menu => Some(Command::ReturnToMenu),
            _ => None,
        }
    }

    /// Only movement and jump keys mean anything on release.
    pub fn key_up(&self, key_code: u32) -> Option<Command> {
        self.movement(key_code, false)
    }

    pub fn custom(&self, kind: u32) -> Option<Command> {
        match kind {
            CUSTOM_RESET => Some(Command::ReturnToMenu),
            CUSTOM_PAUSE => Some(Command::TogglePause),
            CUSTOM_INSTRUCTIONS => Some(Command::ToggleInstructions),
            _ => None,
        }
    }

    fn movement(&self, key_code: u32, pressed: bool) -> Option<Command> {
        for (body, keys) in [(BodyKind::Red, &self.red), (BodyKind::Blue, &self.blue)] {
            if key_code == keys.left {
                return Some(Command::Move {
                    body,
                    dir: Direction::Left,
                    pressed,
                });
            }
            if key_code == keys.right {
                return Some(Command::Move {
                    body,
                    dir: Direction::Right,
                    pressed,
                });
            }
            if key_code == keys.jump {
                return Some(Command::Jump { body, pressed });
            }
        }
        None
    }
}
