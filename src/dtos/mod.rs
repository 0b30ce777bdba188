pub mod orderdtos;
pub mod servicedtos;
pub mod userdtos;
pub mod workerdtos;
