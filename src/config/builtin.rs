//! Built-in patch: rewrites the character count test in the welcome screen suite.

/// File patched when no `--file` or `--manifest` is given
pub const DEFAULT_PATH: &str = "components/WelcomeScreen.test.tsx";

/// Printed when the target block was found and replaced
pub const SUCCESS_MESSAGE: &str = "Test updated successfully.";

/// Printed when the target block is absent
pub const FAILURE_MESSAGE: &str = "Could not find the test block to replace.";

/// Test body reading counts straight from the first persona preset
pub const TARGET_BLOCK: &str = r#"      it('should show character count indicators', async () => {
        const user = userEvent.setup();
        render(<WelcomeScreen onStartCall={mockOnStartCall} />);

        await user.click(screen.getByText('Configure'));

        // Initial state (default persona)
        expect(screen.getByText(`${PERSONA_PRESETS[0].name.length}/${MAX_INPUT_LENGTHS.name}`)).toBeInTheDocument();
        expect(screen.getByText(`${PERSONA_PRESETS[0].systemInstruction.length}/${MAX_INPUT_LENGTHS.systemInstruction}`)).toBeInTheDocument();
        expect(screen.getByText(`${PERSONA_PRESETS[0].greeting.length}/${MAX_INPUT_LENGTHS.greeting}`)).toBeInTheDocument();
      });"#;

/// Test body reading counts from the rendered input values
pub const REPLACEMENT_BLOCK: &str = r#"      it('should show character count indicators', async () => {
        const user = userEvent.setup();
        const { container } = render(<WelcomeScreen onStartCall={mockOnStartCall} />);

        await user.click(screen.getByText('Configure'));

        // Check name input
        const nameInput = container.querySelector('input[type="text"]') as HTMLInputElement;
        const initialNameLength = nameInput.value.length;
        expect(screen.getByText(`${initialNameLength}/${MAX_INPUT_LENGTHS.name}`)).toBeInTheDocument();

        // Check system instruction
        const instructionsTextarea = screen.getByPlaceholderText(/describe how the agent should behave/i) as HTMLTextAreaElement;
        const initialSystemInstructionLength = instructionsTextarea.value.length;
        expect(screen.getByText(`${initialSystemInstructionLength}/${MAX_INPUT_LENGTHS.systemInstruction}`)).toBeInTheDocument();

        // Check greeting
        const greetingTextarea = screen.getByPlaceholderText(/what the agent says first/i) as HTMLTextAreaElement;
        const initialGreetingLength = greetingTextarea.value.length;
        expect(screen.getByText(`${initialGreetingLength}/${MAX_INPUT_LENGTHS.greeting}`)).toBeInTheDocument();
      });"#;
