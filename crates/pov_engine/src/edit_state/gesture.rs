//! Pointer gestures
//!
//! A gesture is a press, any number of moves and a release (commit) or an
//! abort (cancel). Between begin and end every write goes to the preview
//! grid; the committed grid sees exactly one write when the gesture commits
//! and none when it is cancelled.
//!
//! - `draw`/`erase` paint the cells along the pointer path
//! - `line` redraws a line from the press point to the pointer on each move
//! - `circle` redraws a circle around the press point through the pointer

use crate::brushes::circle::draw_circle_to;
use crate::brushes::line::draw_line;
use crate::tools::Tool;
use crate::undo_operation::PovOperationType;
use crate::Point;

use super::EditState;

/// An active pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    /// Tool captured at press time
    pub tool: Tool,
    /// Press position
    pub start: Point,
    /// Most recent pointer position
    pub last: Point,
}

impl EditState {
    /// Start a gesture at `pt` with the current tool.
    ///
    /// A gesture that is still running is cancelled first.
    pub fn begin_gesture(&mut self, pt: Point) {
        if self.gesture.is_some() {
            log::debug!("begin_gesture while a gesture is active, cancelling it");
            self.cancel_gesture();
        }
        let gesture = Gesture {
            tool: self.tool,
            start: pt,
            last: pt,
        };
        log::debug!("begin {} gesture at {pt}", gesture.tool);
        self.gesture = Some(gesture);
        self.preview = Some(self.grid.clone());
        self.render_gesture(pt);
    }

    /// Move the pointer of the active gesture to `pt`.
    /// Returns false if no gesture is active.
    pub fn update_gesture(&mut self, pt: Point) -> bool {
        if self.gesture.is_none() {
            return false;
        }
        self.render_gesture(pt);
        true
    }

    /// Finish the active gesture and commit the preview as one undo step.
    ///
    /// Returns true if the committed grid changed.
    pub fn commit_gesture(&mut self) -> bool {
        let (Some(gesture), Some(preview)) = (self.gesture.take(), self.preview.take()) else {
            self.gesture = None;
            self.preview = None;
            return false;
        };
        let changed = self.commit_grid(description(gesture.tool), PovOperationType::EditPixels, preview);
        log::debug!("commit {} gesture (changed: {changed})", gesture.tool);
        changed
    }

    /// Abort the active gesture. The committed grid is left untouched.
    /// Returns true if a gesture was active.
    pub fn cancel_gesture(&mut self) -> bool {
        self.preview = None;
        match self.gesture.take() {
            Some(gesture) => {
                log::debug!("cancel {} gesture", gesture.tool);
                true
            }
            None => false,
        }
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    fn render_gesture(&mut self, pt: Point) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        let from = gesture.last;
        gesture.last = pt;
        let gesture = *gesture;

        if gesture.tool.is_freehand() {
            // Strokes accumulate; connect consecutive samples so fast moves leave no gaps
            if let Some(preview) = self.preview.as_mut() {
                draw_line(preview, from, pt, gesture.tool.value());
            }
            return;
        }

        // Shapes are redrawn from the committed grid on every move
        let mut preview = self.grid.clone();
        match gesture.tool {
            Tool::Line => draw_line(&mut preview, gesture.start, pt, true),
            Tool::Circle => draw_circle_to(&mut preview, gesture.start, pt, true),
            Tool::Draw | Tool::Erase => {}
        }
        self.preview = Some(preview);
    }
}

fn description(tool: Tool) -> &'static str {
    match tool {
        Tool::Draw => "Draw",
        Tool::Erase => "Erase",
        Tool::Line => "Line",
        Tool::Circle => "Circle",
    }
}
