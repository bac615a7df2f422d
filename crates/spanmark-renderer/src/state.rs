//! Walk state for the markdown driver.
//!
//! Containers are rendered leaf-to-root, so every open container gets a
//! [`Frame`] that buffers its rendered children until the matching end event.

use pulldown_cmark::Alignment;

use crate::backend::{Align, CellFlags};
use crate::origin::Origin;

/// Kind of an open container, with whatever its end event needs.
#[derive(Debug)]
pub(crate) enum FrameKind {
    Paragraph,
    Heading { level: u8 },
    BlockQuote,
    CodeBlock { info: String },
    List { start: Option<u64> },
    Item { task: bool, checked: bool },
    Table { header: String },
    TableHead,
    TableRow,
    TableCell { flags: CellFlags },
    Emphasis,
    Strong,
    Strikethrough,
    Link { href: String, title: String },
    Image { href: String, title: String },
    /// Container with no backend method; its children are spliced into the parent.
    PassThrough,
}

/// An open container.
#[derive(Debug)]
pub(crate) struct Frame {
    pub kind: FrameKind,
    pub origin: Origin,
    /// Rendered children.
    pub html: String,
    /// Unescaped text of the children, for slugs and alt text.
    pub plain: String,
}

impl Frame {
    pub fn new(kind: FrameKind, origin: Origin) -> Self {
        Self {
            kind,
            origin,
            html: String::new(),
            plain: String::new(),
        }
    }

    pub fn is_code_block(&self) -> bool {
        matches!(self.kind, FrameKind::CodeBlock { .. })
    }
}

/// State for tracking table cell position.
#[derive(Debug, Default)]
pub(crate) struct TableState {
    /// Whether we're inside the table header row.
    in_head: bool,
    /// Column alignments for current table.
    alignments: Vec<Alignment>,
    /// Current column index in table row.
    cell_index: usize,
}

impl TableState {
    /// Start a new table with column alignments.
    pub fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    /// Start the table header row.
    pub fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    /// End the table header row.
    pub fn end_head(&mut self) {
        self.in_head = false;
    }

    /// Start a new body row.
    pub fn start_row(&mut self) {
        self.cell_index = 0;
    }

    /// Flags for the cell being opened; advances to the next column.
    pub fn next_cell(&mut self) -> CellFlags {
        let align = match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => Some(Align::Left),
            Some(Alignment::Center) => Some(Align::Center),
            Some(Alignment::Right) => Some(Align::Right),
            Some(Alignment::None) | None => None,
        };
        self.cell_index += 1;
        CellFlags {
            header: self.in_head,
            align,
        }
    }
}
