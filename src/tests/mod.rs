pub mod support;
mod site_end_to_end;
