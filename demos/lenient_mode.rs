//! Compare strict and lenient handling of a parameter without `Value`

use ribbonview::{Report, ResolverConfig, TextRenderer};

const RIBBON: &str = r#"<RibbonDiffXml>
  <Button Id="new.account.Approve" Command="new.account.ApproveCommand" ModernImage="Accept"/>
  <CommandDefinition Id="new.account.ApproveCommand">
    <Actions>
      <JavaScriptFunction FunctionName="Approvals.approve" Library="$webresource:new_approvals.js">
        <CrmParameter Value="PrimaryControl"/>
        <BoolParameter/>
      </JavaScriptFunction>
    </Actions>
  </CommandDefinition>
</RibbonDiffXml>"#;

fn main() {
    println!("=== Strict ===");
    match Report::from_xml(RIBBON, "account Ribbon Buttons", ResolverConfig::strict()) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Error {}: {}", e.code(), e),
    }

    println!("\n=== Lenient ===");
    match Report::from_xml(RIBBON, "account Ribbon Buttons", ResolverConfig::lenient()) {
        Ok(report) => {
            for warning in &report.warnings {
                println!("warning: {}", warning);
            }
            match TextRenderer::new().render_to_string(&report) {
                Ok(text) => println!("\n{}", text),
                Err(e) => println!("Render failed: {}", e),
            }
        }
        Err(e) => println!("Error: {}", e),
    }
}
