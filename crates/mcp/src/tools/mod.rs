pub mod quran;
mod registry;
pub mod schemas;

pub use quran::{register_quran_tools, render_error, ResourceTool};
pub use registry::{
    json_schema_boolean, json_schema_integer, json_schema_object, json_schema_string, Tool,
    ToolRegistry,
};
