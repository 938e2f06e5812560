mod graph_select;
mod input;

pub use graph_select::{
    CREATE_NEW_INDEX, GraphSelect, GraphSelectAction, GraphSelectState, GraphSelectStyle,
    PLACEHOLDER_INDEX, SEPARATOR_INDEX, SelectEntry, format_timestamp,
};
pub use input::TextInput;
