pub mod u101_upload_company_csv;
