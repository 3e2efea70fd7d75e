// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use errors::*;` to get access to everything `error_chain!` creates.
#![allow(deprecated)]

error_chain! {

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidDimensions(width: usize, height: usize) {
            description("invalid maze dimensions")
            display("Invalid maze dimensions {}x{}: width and height must be odd, greater than 3 \
                     and at most {}",
                    width, height, ::std::u32::MAX)
        }
        MazeNotReady {
            description("no maze has been generated or loaded")
            display("Please define width and height and generate, or load a pre-made maze")
        }
        CorruptMaze(reason: String) {
            description("corrupt maze data")
            display("Corrupt maze data: {}", reason)
        }
        NoPathFound {
            description("no path from entrance to exit")
            display("The maze has no path from the entrance to the exit")
        }
        PreconditionViolation(reason: String) {
            description("maze invariant violated")
            display("Maze invariant violated: {}", reason)
        }
    }
}
