// Output formatting — terminal display of analysis results.

pub mod terminal;
