mod fields;

pub use fields::render_form;
