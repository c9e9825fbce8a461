mod create_service_tests;
mod mock_mail_tests;
