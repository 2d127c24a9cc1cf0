//! GameView: maps a `core::PuzzleSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. It also owns the
//! board geometry, so pointer hit-testing (`rod_at`) lives here too.

use crate::core::PuzzleSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Disk, RodIndex, PALETTE_SIZE, ROD_COUNT};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// The disk the player is holding, as far as drawing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragView {
    pub from: RodIndex,
    /// Where the pointer is; `None` draws the disk lifted above its rod.
    pub pointer: Option<(u16, u16)>,
}

/// Shell-owned extras drawn on top of the puzzle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    pub drag: Option<DragView>,
    /// Transcript lines, oldest first; the newest ones that fit are shown.
    pub transcript: &'a [String],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board geometry for one disk count and viewport.
///
/// Rows inside the frame, top to bottom: a lift row for a held disk, the rod
/// caps, one row per disk, and the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Columns per rod slot
    pub slot_w: u16,
    /// Floor row
    pub base_y: u16,
}

impl BoardLayout {
    /// Column of the rod's center line.
    pub fn rod_x(&self, rod: RodIndex) -> u16 {
        self.start_x + 1 + self.slot_w * rod.index() as u16 + self.slot_w / 2
    }

    /// Row of the disk at `level` (0 = bottom).
    pub fn disk_y(&self, level: usize) -> u16 {
        self.base_y.saturating_sub(1 + level as u16)
    }

    pub fn lift_y(&self) -> u16 {
        self.start_y + 1
    }

    /// Rod whose slot contains column `x`, `None` outside the frame interior.
    pub fn rod_at(&self, x: u16) -> Option<RodIndex> {
        let inner_start = self.start_x + 1;
        if x < inner_start || self.slot_w == 0 {
            return None;
        }
        RodIndex::new(((x - inner_start) / self.slot_w) as usize)
    }
}

/// Background of the play area (the classic bright blue).
const BOARD_BG: Rgb = Rgb::new(11, 28, 244);

const PALETTE: [Rgb; PALETTE_SIZE as usize] = [
    Rgb::new(155, 160, 135),
    Rgb::new(205, 80, 195),
    Rgb::new(255, 0, 255),
    Rgb::new(105, 240, 75),
    Rgb::new(55, 200, 215),
    Rgb::new(240, 170, 60),
];

/// A lightweight terminal renderer for the puzzle.
pub struct GameView {
    /// Columns a disk grows per rank on each side of the rod.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, disk_count: u8, viewport: Viewport) -> BoardLayout {
        let n = disk_count as u16;
        let slot_w = 2 * n * self.cell_w + 3;
        let frame_w = slot_w * ROD_COUNT as u16 + 2;
        let frame_h = n + 5;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            start_x,
            start_y,
            frame_w,
            frame_h,
            slot_w,
            base_y: start_y + frame_h - 2,
        }
    }

    /// Rod under terminal column `x`. Only the column matters, like a drop zone.
    pub fn rod_at(&self, snap: &PuzzleSnapshot, viewport: Viewport, x: u16) -> Option<RodIndex> {
        let layout = self.layout(snap.disk_count, viewport);
        if x >= layout.start_x + layout.frame_w - 1 {
            return None;
        }
        layout.rod_at(x)
    }

    /// Render the current puzzle into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &PuzzleSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_overlay(snap, &Overlay::default(), viewport, fb);
    }

    pub fn render_into_with_overlay(
        &self,
        snap: &PuzzleSnapshot,
        overlay: &Overlay<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap.disk_count, viewport);
        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            bg,
        );
        self.draw_border(fb, layout.start_x, layout.start_y, layout.frame_w, layout.frame_h, border);
        self.draw_floor(fb, &layout);

        let held = overlay
            .drag
            .and_then(|d| snap.top_disk(d.from).map(|disk| (d, disk)));

        for rod in RodIndex::all() {
            self.draw_rod(fb, &layout, rod);
            let disks = snap.rod(rod).disks();
            let visible = match held {
                Some((d, _)) if d.from == rod => &disks[..disks.len() - 1],
                _ => disks,
            };
            for (level, disk) in visible.iter().enumerate() {
                self.draw_disk(fb, layout.rod_x(rod), layout.disk_y(level), disk);
            }
        }

        if let Some((drag, disk)) = held {
            let (x, y) = drag
                .pointer
                .unwrap_or((layout.rod_x(drag.from), layout.lift_y()));
            self.draw_disk(fb, x, y, &disk);
        }

        self.draw_side_panel(fb, snap, overlay, viewport, &layout);
        self.draw_help(fb, viewport, &layout);

        if snap.won {
            self.draw_overlay_text(fb, &layout, "YOU WIN!");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &PuzzleSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_overlay(
        &self,
        snap: &PuzzleSnapshot,
        overlay: &Overlay<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_overlay(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_floor(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG);
        for dx in 1..layout.frame_w.saturating_sub(1) {
            fb.put_char(layout.start_x + dx, layout.base_y, '▀', style);
        }
    }

    fn draw_rod(&self, fb: &mut FrameBuffer, layout: &BoardLayout, rod: RodIndex) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG);
        let x = layout.rod_x(rod);
        for y in layout.start_y + 2..layout.base_y {
            fb.put_char(x, y, '┃', style);
        }
    }

    /// Draw a disk centered on column `center_x`.
    fn draw_disk(&self, fb: &mut FrameBuffer, center_x: u16, y: u16, disk: &Disk) {
        let half = disk.rank() as u16 * self.cell_w;
        let style = CellStyle::new(PALETTE[disk.tag() as usize % PALETTE.len()], BOARD_BG).bold();
        fb.fill_rect(center_x.saturating_sub(half), y, 2 * half + 1, 1, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &PuzzleSnapshot,
        overlay: &Overlay<'_>,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = value.dim();

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.move_count, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "DISKS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.disk_count as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "UNDO", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.history_len as u32, value);
        let used = digits(snap.history_len as u32);
        fb.put_char(panel_x + used, y, '/', dim);
        fb.put_u32(panel_x + used + 1, y, snap.history_capacity as u32, dim);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATUS", label);
        y = y.saturating_add(1);
        let status = match (snap.won, snap.locked) {
            (true, true) => "SOLVED (locked)",
            (true, false) => "SOLVED",
            _ => "PLAYING",
        };
        fb.put_str(panel_x, y, status, value);
        y = y.saturating_add(2);

        if overlay.transcript.is_empty() || y >= viewport.height {
            return;
        }
        fb.put_str(panel_x, y, "LOG", label);
        y = y.saturating_add(1);
        let room = viewport.height.saturating_sub(y) as usize;
        let skip = overlay.transcript.len().saturating_sub(room);
        for line in &overlay.transcript[skip..] {
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport, layout: &BoardLayout) {
        let y = layout.start_y + layout.frame_h;
        if y >= viewport.height {
            return;
        }
        let style = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0)).dim();
        fb.put_str(
            layout.start_x,
            y,
            "drag or 1-3: move  ^Z: undo  R: restart  Q: quit",
            style,
        );
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = layout
            .start_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, layout.lift_y(), text, style);
    }
}

fn digits(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
