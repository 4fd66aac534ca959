pub mod u501_csv_upload;
