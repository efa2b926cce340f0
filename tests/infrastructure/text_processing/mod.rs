mod composite_extractor_test;
mod local_pdf_adapter_test;
