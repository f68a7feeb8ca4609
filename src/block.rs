/// Letter block model - the six record kinds of the survey language
use serde::{Deserialize, Serialize};

/// Role of a form field, used to name generated inputs and to wire
/// client-side validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldRole {
    /// Radio groups: exactly one option may be selected
    Single,
    /// Checkbox groups: any subset may be selected
    Multi,
}

impl FieldRole {
    pub fn prefix(&self) -> &'static str {
        match self {
            FieldRole::Single => "rd",
            FieldRole::Multi => "ck",
        }
    }
}

/// Identifier of a generated form field: role prefix plus the block's line
/// index. The line index is the block's only identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldId {
    pub role: FieldRole,
    pub line: usize,
}

impl FieldId {
    pub fn new(role: FieldRole, line: usize) -> Self {
        FieldId { role, line }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.role.prefix(), self.line)
    }
}

/// One selectable option of a SingleChoice block
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceOption {
    /// Shown to the end-user next to the control
    pub label: String,
    /// Written into the assembled letter when selected
    pub text: String,
}

/// One selectable option of a RandomizedSingleChoice block
#[derive(Debug, Clone, PartialEq)]
pub struct RandomChoiceOption {
    pub label: String,
    /// Output text is drawn from these at render time
    pub candidates: Vec<String>,
}

/// One selectable option of a MultiChoice block
#[derive(Debug, Clone, PartialEq)]
pub struct MultiOption {
    pub label: String,
    pub text: String,
    /// Appended after the text when this is not the last option of the
    /// group, preserving natural-language flow across selections
    pub connector: String,
}

/// One selectable option of a RandomizedMultiChoice block
#[derive(Debug, Clone, PartialEq)]
pub struct RandomMultiOption {
    pub label: String,
    pub candidates: Vec<String>,
    pub connector: String,
}

/// The closed set of block kinds, one variant per record kind of the
/// language, each carrying exactly the payload it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    /// A fixed text, always emitted
    StaticText { text: String },
    /// One of the candidates is chosen uniformly at random per render
    RandomStaticText { candidates: Vec<String> },
    /// End-user selects exactly one label (or none, if optional)
    SingleChoice {
        title: String,
        options: Vec<ChoiceOption>,
    },
    /// Like SingleChoice, but each label's output text is drawn randomly
    /// from its candidate list
    RandomizedSingleChoice {
        title: String,
        options: Vec<RandomChoiceOption>,
    },
    /// End-user selects any subset; connectors keep the letter readable
    MultiChoice {
        title: String,
        options: Vec<MultiOption>,
    },
    /// Combines MultiChoice subsets with per-option random candidates
    RandomizedMultiChoice {
        title: String,
        options: Vec<RandomMultiOption>,
    },
}

/// One parsed line of the survey language
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Line index in the raw text (0-indexed, blank lines included)
    pub line: usize,
    /// Whether the end-user must answer before submitting
    pub required: bool,
    pub kind: BlockKind,
}

impl Block {
    pub fn new(line: usize, kind: BlockKind) -> Self {
        Block {
            line,
            required: false,
            kind,
        }
    }

    /// Role of the form field this block generates. Static kinds emit
    /// hidden fields and share the single-select role for naming purposes.
    pub fn role(&self) -> FieldRole {
        match self.kind {
            BlockKind::MultiChoice { .. } | BlockKind::RandomizedMultiChoice { .. } => {
                FieldRole::Multi
            }
            _ => FieldRole::Single,
        }
    }

    /// Structured identifier of this block's form field
    pub fn field_id(&self) -> FieldId {
        FieldId::new(self.role(), self.line)
    }

    /// Display title for the choice kinds; static kinds have none
    pub fn title(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::StaticText { .. } | BlockKind::RandomStaticText { .. } => None,
            BlockKind::SingleChoice { title, .. }
            | BlockKind::RandomizedSingleChoice { title, .. }
            | BlockKind::MultiChoice { title, .. }
            | BlockKind::RandomizedMultiChoice { title, .. } => Some(title),
        }
    }
}

/// An ordered collection of blocks keyed by line index, plus the derived
/// list of required-field identifiers in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Survey {
    blocks: Vec<Block>,
    required_fields: Vec<FieldId>,
}

impl Survey {
    pub fn new() -> Self {
        Survey::default()
    }

    /// Append a block; a required block also records its field identifier.
    /// Blocks arrive in line order from the parser.
    pub fn push(&mut self, block: Block) {
        if block.required {
            self.required_fields.push(block.field_id());
        }
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn required_fields(&self) -> &[FieldId] {
        &self.required_fields
    }

    pub fn get(&self, line: usize) -> Option<&Block> {
        self.blocks.iter().find(|b| b.line == line)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
