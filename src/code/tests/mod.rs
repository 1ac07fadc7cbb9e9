mod image_test;
