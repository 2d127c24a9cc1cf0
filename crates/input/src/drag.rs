//! Held-disk tracking for drag-and-drop and keyboard play.
//!
//! A grab only remembers the rod the disk came from and, for pointer drags, where
//! the pointer is. The disk itself stays on its rod in the puzzle until a drop
//! turns into a [`GameAction::Move`].

use crate::types::{GameAction, RodIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grab {
    pub from: RodIndex,
    /// Pointer position while dragging; `None` for keyboard selection.
    pub pointer: Option<(u16, u16)>,
}

#[derive(Debug, Clone, Default)]
pub struct DragState {
    grab: Option<Grab>,
}

impl DragState {
    pub fn new() -> Self {
        Self { grab: None }
    }

    pub fn grab(&self) -> Option<Grab> {
        self.grab
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Pointer pressed over `rod` (if any). Picks up only from a rod with disks.
    pub fn press(&mut self, rod: Option<RodIndex>, rod_has_disk: bool, x: u16, y: u16) -> bool {
        match rod {
            Some(from) if rod_has_disk => {
                self.grab = Some(Grab {
                    from,
                    pointer: Some((x, y)),
                });
                true
            }
            _ => false,
        }
    }

    pub fn motion(&mut self, x: u16, y: u16) {
        if let Some(grab) = self.grab.as_mut() {
            if grab.pointer.is_some() {
                grab.pointer = Some((x, y));
            }
        }
    }

    /// Pointer released over `rod` (if any).
    ///
    /// Dropping on a different rod yields a move; anything else just lets go.
    pub fn release(&mut self, rod: Option<RodIndex>) -> Option<GameAction> {
        let grab = self.grab.take()?;
        match rod {
            Some(to) if to != grab.from => Some(GameAction::Move {
                from: grab.from,
                to,
            }),
            _ => None,
        }
    }

    /// Keyboard rod selection: first pick, then drop.
    ///
    /// Selecting the source rod again puts the disk back.
    pub fn select(&mut self, rod: RodIndex, rod_has_disk: bool) -> Option<GameAction> {
        match self.grab.take() {
            Some(grab) if grab.from != rod => Some(GameAction::Move {
                from: grab.from,
                to: rod,
            }),
            Some(_) => None,
            None => {
                if rod_has_disk {
                    self.grab = Some(Grab {
                        from: rod,
                        pointer: None,
                    });
                }
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.grab = None;
    }
}
