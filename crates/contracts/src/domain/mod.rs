pub mod a101_company;
