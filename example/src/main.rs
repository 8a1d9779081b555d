fn main() -> Result<(), example::ExampleError> {
    example::desktop_main()
}
