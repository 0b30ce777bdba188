pub mod ordermodel;
pub mod servicemodel;
pub mod usermodel;
pub mod workermodel;
