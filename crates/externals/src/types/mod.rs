pub mod transform_output;
