pub mod bias_detector;
pub mod investment_analyzer;
pub mod purchase_analyzer;
pub mod validator;
