//! Java coding practice deck.
//!
//! Each card poses a small programming exercise. The question side has a
//! contenteditable area whose contents persist through browser local
//! storage, so the answer side can show what the user typed next to the
//! reference solution.

use cardforge_deck::{
    note_guid, qualified_model_id, CardTemplate, DeckError, DeckMetadata, DeckSource, MediaStore,
    Note, NoteModel,
};

/// (question, solution, number, tags) per card.
const CARDS: [(&str, &str, &str, &str); 20] = [
    (
        "Define a class called Person with the following:\n• Fields: name (String) and age (int)\n• A method printDetails() that prints the name and age.\n• In the main method, create an object of Person, set values, and call printDetails().",
        r#"public class Person {
    String name;
    int age;

    void printDetails() {
        System.out.println("Name: " + name);
        System.out.println("Age: " + age);
    }

    public static void main(String[] args) {
        Person person = new Person();
        person.name = "Alice";
        person.age = 25;
        person.printDetails();
    }
}"#,
        "1",
        "class, object, basic",
    ),
    (
        "Modify the Person class to add the toString() method.\n• The method should return \"Person[name=Alice, age=25]\"\n• In the main method, print the object directly.",
        r#"public class Person {
    String name;
    int age;

    @Override
    public String toString() {
        return "Person[name=" + name + ", age=" + age + "]";
    }

    public static void main(String[] args) {
        Person person = new Person();
        person.name = "Alice";
        person.age = 25;
        System.out.println(person);
    }
}"#,
        "2",
        "toString, override",
    ),
    (
        "Modify the Person class to include:\n• A constructor that initializes name and age.\n• Create an object using the constructor and print the details.",
        r#"public class Person {
    String name;
    int age;

    Person(String name, int age) {
        this.name = name;
        this.age = age;
    }

    void printDetails() {
        System.out.println("Name: " + name);
        System.out.println("Age: " + age);
    }

    public static void main(String[] args) {
        Person person = new Person("John", 30);
        person.printDetails();
    }
}"#,
        "3",
        "constructor",
    ),
    (
        "Write a class named Calculator. In the class write a method sum(int a, int b) that takes two integers as parameters and returns their sum.",
        r#"public class Calculator {
    int sum(int a, int b) {
        return a + b;
    }

    public static void main(String[] args) {
        Calculator calc = new Calculator();
        int result = calc.sum(5, 3);
        System.out.println("Sum: " + result);
    }
}"#,
        "4",
        "methods, parameters, return",
    ),
    (
        "Write a Java program that:\n• Uses Scanner to read an integer from the user.\n• Prints the entered number using System.out.println().",
        r#"import java.util.Scanner;

public class ReadInteger {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.print("Enter a number: ");
        int number = scanner.nextInt();

        System.out.println("You entered: " + number);

        scanner.close();
    }
}"#,
        "5",
        "scanner, input, integer",
    ),
    (
        "Write a program that:\n• Reads a floating-point number from the user.\n• Prints it using System.out.printf() with two decimal places.",
        r#"import java.util.Scanner;

public class ReadFloat {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.print("Enter a number: ");
        double number = scanner.nextDouble();

        System.out.printf("You entered: %.2f%n", number);

        scanner.close();
    }
}"#,
        "6",
        "scanner, input, float, printf",
    ),
    (
        "Write a Java program that:\n• Reads a string using Scanner.nextLine().\n• Prints the entered string using System.out.println().",
        r#"import java.util.Scanner;

public class ReadString {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.print("Enter your name: ");
        String name = scanner.nextLine();

        System.out.println("Hello, " + name + "!");

        scanner.close();
    }
}"#,
        "7",
        "scanner, input, string, nextLine",
    ),
    (
        "Write a Java program that:\n• Reads two integers from the user.\n• Calculates their sum and prints it.",
        r#"import java.util.Scanner;

public class AddIntegers {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.print("Enter first number: ");
        int num1 = scanner.nextInt();

        System.out.print("Enter second number: ");
        int num2 = scanner.nextInt();

        int sum = num1 + num2;
        System.out.println("Sum: " + sum);

        scanner.close();
    }
}"#,
        "8",
        "addition, scanner, input",
    ),
    (
        "Write a Java program that:\n• Reads two floating-point numbers from the user.\n• Prints their product using printf() with two decimal places.",
        r#"import java.util.Scanner;

public class MultiplyFloats {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.print("Enter first number: ");
        double num1 = scanner.nextDouble();

        System.out.print("Enter second number: ");
        double num2 = scanner.nextDouble();

        double product = num1 * num2;
        System.out.printf("Product: %.2f%n", product);

        scanner.close();
    }
}"#,
        "9",
        "multiplication, scanner, float, printf",
    ),
    (
        "Write a Java program that:\n• Reads the radius of a circle from the user.\n• Calculates and prints the area using π * r², formatted to two decimal places.",
        r#"import java.util.Scanner;

public class CircleArea {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.print("Enter radius: ");
        double radius = scanner.nextDouble();

        double area = Math.PI * radius * radius;
        System.out.printf("Area of circle: %.2f%n", area);

        scanner.close();
    }
}"#,
        "10",
        "circle, area, Math.PI, printf",
    ),
    (
        "Write a Java program that:\n• Reads a name and an age from the user.\n• Prints a sentence using printf().",
        r#"import java.util.Scanner;

public class NameAge {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.print("Enter your name: ");
        String name = scanner.nextLine();

        System.out.print("Enter your age: ");
        int age = scanner.nextInt();

        System.out.printf("%s is %d years old.%n", name, age);

        scanner.close();
    }
}"#,
        "11",
        "printf, scanner, multiple inputs",
    ),
    (
        "Write a Java program that:\n• Reads three numbers from the user.\n• Computes and prints their average to two decimal places.",
        r#"import java.util.Scanner;

public class Average {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.print("Enter three numbers: ");
        double num1 = scanner.nextDouble();
        double num2 = scanner.nextDouble();
        double num3 = scanner.nextDouble();

        double average = (num1 + num2 + num3) / 3;
        System.out.printf("Average: %.2f%n", average);

        scanner.close();
    }
}"#,
        "12",
        "average, scanner, multiple inputs, printf",
    ),
    (
        "Write a Java program that:\n• Reads a character from the user.\n• Prints its ASCII value.",
        r#"import java.util.Scanner;

public class AsciiValue {
    public static void main(String[] args) {
        Scanner scanner = new Scanner(System.in);

        System.out.print("Enter a character: ");
        char ch = scanner.next().charAt(0);

        int ascii = (int) ch;
        System.out.println("ASCII value of '" + ch + "': " + ascii);

        scanner.close();
    }
}"#,
        "13",
        "ascii, char, type casting",
    ),
    (
        "Create a class Person with the following:\n• Fields: name (String) and age (int)\n• Method printDetails() that prints the name and age\n• Create a Person object in the main method and call printDetails()",
        r#"public class Person {
    String name;
    int age;

    void printDetails() {
        System.out.println("Name: " + name);
        System.out.println("Age: " + age);
    }

    public static void main(String[] args) {
        Person person = new Person();
        person.name = "Alice";
        person.age = 25;
        person.printDetails();
    }
}"#,
        "14",
        "class, fields, methods, objects",
    ),
    (
        "Modify the Person class to include:\n• A constructor that initializes name and age\n• In main(), create a Person object using the constructor and print the details",
        r#"public class Person {
    String name;
    int age;

    Person(String name, int age) {
        this.name = name;
        this.age = age;
    }

    void printDetails() {
        System.out.println("Person created: " + name + ", Age: " + age);
    }

    public static void main(String[] args) {
        Person person = new Person("Alice", 25);
        person.printDetails();
    }
}"#,
        "15",
        "constructor, this keyword",
    ),
    (
        "Create a class Car with:\n• Private fields: brand (String) and year (int)\n• Public getter and setter methods for both fields\n• In main(), create a Car object, set values, and print them",
        r#"public class Car {
    private String brand;
    private int year;

    public String getBrand() {
        return brand;
    }

    public void setBrand(String brand) {
        this.brand = brand;
    }

    public int getYear() {
        return year;
    }

    public void setYear(int year) {
        this.year = year;
    }

    public static void main(String[] args) {
        Car car = new Car();
        car.setBrand("Toyota");
        car.setYear(2020);

        System.out.println("Car Brand: " + car.getBrand());
        System.out.println("Manufactured Year: " + car.getYear());
    }
}"#,
        "16",
        "getters, setters, encapsulation, private",
    ),
    (
        "Create a class Rectangle with:\n• Fields length and width\n• Method calculateArea(int length, int width) that returns the area\n• In main(), create a Rectangle object and print its area",
        r#"public class Rectangle {
    int length;
    int width;

    int calculateArea(int length, int width) {
        return length * width;
    }

    public static void main(String[] args) {
        Rectangle rect = new Rectangle();
        int area = rect.calculateArea(10, 5);
        System.out.println("Area: " + area);
    }
}"#,
        "17",
        "methods, return value, parameters",
    ),
    (
        "Modify the Rectangle class to include:\n• A constructor with parameters (length, width)\n• A default constructor that sets default values\n• Create two Rectangle objects using both constructors and print their areas",
        r#"public class Rectangle {
    int length;
    int width;

    Rectangle() {
        this.length = 5;
        this.width = 4;
    }

    Rectangle(int length, int width) {
        this.length = length;
        this.width = width;
    }

    int calculateArea() {
        return length * width;
    }

    public static void main(String[] args) {
        Rectangle rect1 = new Rectangle(10, 5);
        Rectangle rect2 = new Rectangle();

        System.out.println("Area of rectangle 1: " + rect1.calculateArea());
        System.out.println("Area of rectangle 2: " + rect2.calculateArea());
    }
}"#,
        "18",
        "constructor overloading, default constructor",
    ),
    (
        "Create a class Book with:\n• Fields: title and author\n• Override the toString() method to return book details\n• Create a Book object in main() and print it",
        r#"public class Book {
    String title;
    String author;

    Book(String title, String author) {
        this.title = title;
        this.author = author;
    }

    @Override
    public String toString() {
        return "Book[Title=" + title + ", Author=" + author + "]";
    }

    public static void main(String[] args) {
        Book book = new Book("Java Basics", "John Doe");
        System.out.println(book);
    }
}"#,
        "19",
        "toString, override, object methods",
    ),
    (
        "Create a class BankAccount with:\n• Fields: accountNumber, balance\n• Methods: deposit(double amount), withdraw(double amount), printBalance()\n• In main(), create a BankAccount object and test all methods",
        r#"public class BankAccount {
    String accountNumber;
    double balance;

    BankAccount(String accountNumber) {
        this.accountNumber = accountNumber;
        this.balance = 0;
    }

    void deposit(double amount) {
        System.out.println("Depositing $" + amount + "...");
        balance += amount;
        printBalance();
    }

    void withdraw(double amount) {
        if (amount <= balance) {
            System.out.println("Withdrawing $" + amount + "...");
            balance -= amount;
        } else {
            System.out.println("Insufficient funds!");
        }
        printBalance();
    }

    void printBalance() {
        System.out.println("New Balance: $" + balance);
    }

    public static void main(String[] args) {
        BankAccount account = new BankAccount("123456");
        account.deposit(500);
        account.withdraw(200);
    }
}"#,
        "20",
        "methods, object state, banking application",
    ),
];

const QUESTION_TEMPLATE: &str = r#"
<div class="card">
    <div class="question-number">Question {{QuestionNumber}}</div>
    <div class="question">{{Question}}</div>
    <div class="answer-box">
        <div class="code-hint">Write your answer here:</div>
        <div class="code-textarea" contenteditable="true" id="userAnswer"></div>
    </div>
    <div class="tags">{{Tags}}</div>
</div>

<script>
(function() {
    try {
        var questionNumber = "{{QuestionNumber}}";
        var storageKey = "java_answer_" + questionNumber;
        var userAnswer = document.getElementById("userAnswer");

        userAnswer.addEventListener("input", function() {
            try {
                localStorage.setItem(storageKey, this.innerHTML);
            } catch (e) {
                console.error("Failed to save: " + e.message);
            }
        });

        userAnswer.addEventListener("blur", function() {
            try {
                localStorage.setItem(storageKey, this.innerHTML);
            } catch (e) {
                console.error("Failed to save on blur: " + e.message);
            }
        });
    } catch (e) {
        console.error("Error in setup: " + e.message);
    }
})();
</script>
"#;

const ANSWER_TEMPLATE: &str = r#"
<div class="card">
    <div class="question-number">Question {{QuestionNumber}}</div>
    <div class="question">{{Question}}</div>
    <div class="answer-box">
        <div class="code-hint">Your answer:</div>
        <div class="code-textarea user-answer" id="userAnswer"></div>
    </div>
    <div class="solution">
        <div class="solution-title">Solution:</div>
        <div class="solution-content">{{Answer}}</div>
    </div>
    <div class="tags">{{Tags}}</div>
</div>

<script>
(function() {
    try {
        var questionNumber = "{{QuestionNumber}}";
        var storageKey = "java_answer_" + questionNumber;
        var userAnswer = document.getElementById("userAnswer");

        var savedAnswer = localStorage.getItem(storageKey);
        if (savedAnswer && savedAnswer.trim() !== "") {
            userAnswer.innerHTML = savedAnswer;
        } else {
            userAnswer.innerHTML = "// No answer provided";
        }

        userAnswer.setAttribute("contenteditable", "false");
    } catch (e) {
        console.error("Error loading saved answer: " + e.message);
    }
})();
</script>
"#;

const PRACTICE_CSS: &str = "\
.card {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    background-color: #1a1a1a;
    color: #ffffff;
    padding: 20px;
    max-width: 800px;
    margin: 0 auto;
    font-size: 16px;
    line-height: 1.5;
}
.question-number {
    color: #888;
    font-size: 0.9em;
    margin-bottom: 10px;
}
.question {
    font-size: 1.1em;
    margin-bottom: 20px;
    white-space: pre-wrap;
}
.answer-box {
    margin: 20px 0;
}
.code-hint {
    color: #888;
    font-size: 0.9em;
    margin-bottom: 5px;
}
.code-textarea {
    background-color: #2d2d2d;
    border: 1px solid #404040;
    border-radius: 8px;
    min-height: 150px;
    padding: 12px;
    font-family: 'Consolas', 'Monaco', 'Courier New', monospace;
    white-space: pre-wrap;
}
.solution-title {
    color: #4CAF50;
    margin-bottom: 5px;
}
.solution-content {
    background-color: #2d2d2d;
    border-radius: 8px;
    padding: 12px;
    white-space: pre;
    font-family: 'Consolas', 'Monaco', 'Courier New', monospace;
}
.tags {
    margin-top: 15px;
    font-style: italic;
    color: #888;
    font-size: 0.9em;
}
.nightMode {
    background-color: #1a1a1a;
    color: #ffffff;
}
";

/// Hands-on Java programming exercises with editable answers.
#[derive(Debug)]
pub struct JavaPracticeDeck {
    metadata: DeckMetadata,
}

impl JavaPracticeDeck {
    /// Creates the deck.
    pub fn new() -> Self {
        let metadata = DeckMetadata::builder("Java Programming Fundamentals")
            .tag("java")
            .tag("programming")
            .tag("beginners")
            .tag("practice")
            .description("A comprehensive deck covering Java programming fundamentals with 20 practice questions. Each card provides a programming problem with a solution to help you learn and practice Java syntax and concepts.")
            .build();
        Self { metadata }
    }
}

impl Default for JavaPracticeDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckSource for JavaPracticeDeck {
    fn metadata(&self) -> &DeckMetadata {
        &self.metadata
    }

    fn model(&self) -> NoteModel {
        NoteModel::new(
            qualified_model_id(&self.metadata, "Java Practice"),
            "Java Practice",
            vec!["Question", "Answer", "QuestionNumber", "Tags"],
            vec![CardTemplate::new(
                "Java Practice",
                QUESTION_TEMPLATE,
                ANSWER_TEMPLATE,
            )],
            PRACTICE_CSS,
        )
    }

    fn notes(&self, _media: &mut MediaStore) -> Result<Vec<Note>, DeckError> {
        let model_id = self.model().id;
        Ok(CARDS
            .iter()
            .map(|&(question, solution, number, tags)| {
                Note::new(
                    vec![
                        question.to_string(),
                        solution.to_string(),
                        number.to_string(),
                        tags.to_string(),
                    ],
                    note_guid(model_id, number),
                    self.metadata.tags.clone(),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_twenty_numbered_cards() {
        let tmp = tempfile::tempdir().unwrap();
        let deck = JavaPracticeDeck::new();
        let mut media = MediaStore::new(tmp.path()).unwrap();
        let notes = deck.notes(&mut media).unwrap();
        assert_eq!(notes.len(), 20);
        for (i, note) in notes.iter().enumerate() {
            assert_eq!(note.fields[2], (i + 1).to_string());
        }
    }

    #[test]
    fn test_template_persists_answers() {
        let deck = JavaPracticeDeck::new();
        let model = deck.model();
        let template = &model.templates[0];
        assert!(template.qfmt.contains("contenteditable=\"true\""));
        assert!(template.qfmt.contains("localStorage.setItem"));
        assert!(template.afmt.contains("localStorage.getItem"));
    }

    #[test]
    fn test_solutions_are_java() {
        let tmp = tempfile::tempdir().unwrap();
        let deck = JavaPracticeDeck::new();
        let mut media = MediaStore::new(tmp.path()).unwrap();
        let notes = deck.notes(&mut media).unwrap();
        assert!(notes
            .iter()
            .all(|n| n.fields[1].contains("class") || n.fields[1].contains("main")));
    }
}
