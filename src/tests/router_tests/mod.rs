mod cors_tests;
mod locations_tests;
mod predict_tests;
