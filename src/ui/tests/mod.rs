mod table_printer_tests;
